//! Defines traits and implementations for external pair price providers.

use crate::pair::Pair;
use crate::price_map::PriceMap;
#[cfg(not(target_arch = "wasm32"))]
use crate::price_value::PriceValue;
use crate::ApiError;
use serde::Deserialize;
use serde::Serialize;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;

/// Selects a `PriceProvider` implementation from configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PriceProviderKind {
    #[default]
    CoinGecko,
    CoinPaprika,
}

/// A read-only source of pair prices.
///
/// Implementations return one entry per requested pair, in request order.
/// A pair the provider has no quote for is still present, with a
/// `PriceValue::Missing` price.
pub trait PriceProvider {
    async fn get_prices(&self, pairs: &[Pair]) -> Result<PriceMap, ApiError>;
}

#[cfg(not(target_arch = "wasm32"))]
/// Maps a currency code to its (CoinGecko, CoinPaprika) coin ids.
fn coin_ids(code: &str) -> Option<(&'static str, &'static str)> {
    let ids = match code.to_ascii_uppercase().as_str() {
        "BTC" => ("bitcoin", "btc-bitcoin"),
        "ETH" => ("ethereum", "eth-ethereum"),
        "LTC" => ("litecoin", "ltc-litecoin"),
        "DOGE" => ("dogecoin", "doge-dogecoin"),
        "ZEC" => ("zcash", "zec-zcash"),
        "DASH" => ("dash", "dash-dash"),
        "KMD" => ("komodo", "kmd-komodo"),
        "ARRR" => ("pirate-chain", "arrr-pirate"),
        "DGB" => ("digibyte", "dgb-digibyte"),
        "QTUM" => ("qtum", "qtum-qtum"),
        _ => return None,
    };
    Some(ids)
}

/// Provides price data from the public CoinGecko API.
#[cfg(not(target_arch = "wasm32"))]
pub mod coin_gecko {
    use super::*;
    use dioxus_logger::tracing::debug;

    /// `{ "<coin id>": { "<quote code>": price } }`
    type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

    pub struct CoinGecko;

    impl PriceProvider for CoinGecko {
        async fn get_prices(&self, pairs: &[Pair]) -> Result<PriceMap, ApiError> {
            const URL: &str = "https://api.coingecko.com/api/v3/simple/price";

            let mut ids: Vec<&str> = pairs
                .iter()
                .filter_map(|p| coin_ids(p.base()).map(|(gecko, _)| gecko))
                .collect();
            ids.sort_unstable();
            ids.dedup();
            let mut quotes: Vec<String> = pairs
                .iter()
                .filter_map(|p| p.quote().map(str::to_lowercase))
                .collect();
            quotes.sort();
            quotes.dedup();

            let resp = reqwest::Client::new()
                .get(URL)
                .query(&[("ids", ids.join(",")), ("vs_currencies", quotes.join(","))])
                .send()
                .await?
                .error_for_status()?
                .json::<SimplePriceResponse>()
                .await?;

            Ok(pairs
                .iter()
                .map(|pair| {
                    let price = coin_ids(pair.base())
                        .zip(pair.quote())
                        .and_then(|((gecko, _), quote)| {
                            resp.get(gecko)?.get(&quote.to_lowercase()).copied()
                        });
                    if price.is_none() {
                        debug!("coingecko has no quote for {}", pair);
                    }
                    (pair.to_string(), PriceValue::from(price))
                })
                .collect())
        }
    }
}

/// Provides price data from the CoinPaprika API.
#[cfg(not(target_arch = "wasm32"))]
pub mod coin_paprika {
    use super::*;
    use dioxus_logger::tracing::debug;
    use serde_json::Value;

    pub struct CoinPaprika;

    impl PriceProvider for CoinPaprika {
        async fn get_prices(&self, pairs: &[Pair]) -> Result<PriceMap, ApiError> {
            const URL: &str = "https://api.coinpaprika.com/v1/tickers";

            let client = reqwest::Client::new();
            // one ticker request per base currency, quoting every requested quote.
            let mut tickers: HashMap<String, Value> = HashMap::new();
            for pair in pairs {
                let base = pair.base().to_ascii_uppercase();
                if tickers.contains_key(&base) {
                    continue;
                }
                let Some((_, paprika_id)) = coin_ids(&base) else {
                    continue;
                };
                let quotes: Vec<String> = pairs
                    .iter()
                    .filter(|p| p.base().eq_ignore_ascii_case(&base))
                    .filter_map(|p| p.quote().map(str::to_ascii_uppercase))
                    .collect();

                let resp: Value = client
                    .get(format!("{}/{}", URL, paprika_id))
                    .query(&[("quotes", quotes.join(","))])
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<Value>()
                    .await?;
                tickers.insert(base, resp);
            }

            // The structure for price is: resp["quotes"][QUOTE]["price"]
            let get_price = |pair: &Pair| -> Option<f64> {
                tickers
                    .get(&pair.base().to_ascii_uppercase())?
                    .get("quotes")?
                    .get(pair.quote()?.to_ascii_uppercase())?
                    .get("price")?
                    .as_f64()
            };

            Ok(pairs
                .iter()
                .map(|pair| {
                    let price = get_price(pair);
                    if price.is_none() {
                        debug!("coinpaprika has no quote for {}", pair);
                    }
                    (pair.to_string(), PriceValue::from(price))
                })
                .collect())
        }
    }
}
