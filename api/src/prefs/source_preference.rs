use crate::pair::Pair;
use crate::price_providers::PriceProviderKind;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Which pairs to quote, where to get them, and how often the client polls.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SourcePreference {
    provider: PriceProviderKind,
    pairs: Vec<Pair>,
    refresh_secs: u64,
}

impl SourcePreference {
    pub const DEFAULT_PAIRS: &'static [&'static str] = &[
        "BTC/USD", "ETH/USD", "LTC/USD", "DOGE/USD", "ZEC/USD", "DASH/USD", "BTC/EUR",
        "ETH/EUR", "ETH/BTC", "LTC/BTC", "ZEC/BTC", "DASH/BTC", "DOGE/BTC", "KMD/BTC",
        "KMD/USD", "ARRR/USD",
    ];
    pub const DEFAULT_REFRESH_SECS: u64 = 60;

    /// Creates a SourcePreference from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `PRICE_PROVIDER`: "coingecko" or "coinpaprika" (case-insensitive).
    /// - `PRICE_PAIRS`: comma separated list such as "BTC/USD,ETH/BTC".
    ///   Entries that are not `BASE/QUOTE` are skipped with a warning.
    /// - `PRICES_REFRESH_SECS`: client polling interval. minimum 1.
    pub fn from_env() -> Self {
        let provider = env::var("PRICE_PROVIDER")
            .ok()
            .and_then(|s| PriceProviderKind::from_str(s.trim()).ok())
            .unwrap_or_default();

        let pairs = match env::var("PRICE_PAIRS") {
            Ok(list) => parse_pairs(&list),
            Err(_) => parse_pairs(&Self::DEFAULT_PAIRS.join(",")),
        };

        let refresh_secs = env::var("PRICES_REFRESH_SECS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_REFRESH_SECS)
            .max(1);

        Self {
            provider,
            pairs,
            refresh_secs,
        }
    }

    pub fn provider(&self) -> PriceProviderKind {
        self.provider
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }
}

impl Default for SourcePreference {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_pairs(list: &str) -> Vec<Pair> {
    let mut pairs: Vec<Pair> = Vec::new();
    for item in list.split(',').filter(|s| !s.trim().is_empty()) {
        match Pair::from_str(item) {
            Ok(pair) if !pairs.contains(&pair) => pairs.push(pair),
            Ok(_) => {}
            Err(e) => warn!("ignoring configured pair: {}", e),
        }
    }
    pairs
}
