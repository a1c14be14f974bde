//! Handles the caching logic for external price provider data.

use crate::prefs::source_preference::SourcePreference;
use crate::price_map::PriceMap;
use crate::price_providers::coin_gecko::CoinGecko;
use crate::price_providers::coin_paprika::CoinPaprika;
use crate::price_providers::PriceProvider;
use crate::price_providers::PriceProviderKind;
use crate::ApiError;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

const CACHE_DURATION: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
struct CachedPrices {
    source: SourcePreference,
    price_map: PriceMap,
    last_fetched: Instant,
}

impl CachedPrices {
    fn is_fresh_for(&self, source: &SourcePreference) -> bool {
        self.source == *source && self.last_fetched.elapsed() < CACHE_DURATION
    }
}

/// Retrieves pair prices, using a lazy, time-based cache.
///
/// The provider is only called when the cache is empty, older than
/// `CACHE_DURATION`, or was filled for a different source configuration.
/// If a refresh fails while stale data is available, the stale data is
/// served and the failure is logged.
pub async fn get_cached_pair_prices(source: &SourcePreference) -> Result<PriceMap, ApiError> {
    static CACHE: OnceCell<Arc<RwLock<Option<CachedPrices>>>> = OnceCell::const_new();

    let cache_lock = CACHE
        .get_or_init(|| async { Arc::new(RwLock::new(None)) })
        .await;

    let read_lock = cache_lock.read().await;
    if let Some(cache) = &*read_lock {
        if cache.is_fresh_for(source) {
            return Ok(cache.price_map.clone());
        }
    }
    drop(read_lock);

    let mut write_lock = cache_lock.write().await;

    // another task may have refreshed while we waited for the write lock.
    if let Some(cache) = &*write_lock {
        if cache.is_fresh_for(source) {
            return Ok(cache.price_map.clone());
        }
    }

    let fetched = match source.provider() {
        PriceProviderKind::CoinGecko => CoinGecko.get_prices(source.pairs()).await,
        PriceProviderKind::CoinPaprika => CoinPaprika.get_prices(source.pairs()).await,
    };

    match fetched {
        Ok(price_map) => {
            info!(
                "fetched {} pair prices from {}",
                price_map.len(),
                <&'static str>::from(source.provider())
            );
            *write_lock = Some(CachedPrices {
                source: source.clone(),
                price_map: price_map.clone(),
                last_fetched: Instant::now(),
            });
            Ok(price_map)
        }
        Err(e) => match &*write_lock {
            Some(stale) if stale.source == *source => {
                warn!("price refresh failed, serving stale prices: {}", e);
                Ok(stale.price_map.clone())
            }
            _ => Err(e),
        },
    }
}
