//! This crate contains the shared price types and all fullstack server functions.

pub mod pair;
pub mod prefs;
#[cfg(not(target_arch = "wasm32"))]
mod price_caching;
pub mod price_map;
pub mod price_providers;
pub mod price_value;

use dioxus::prelude::*;
use prefs::asset_host::AssetHost;
use prefs::source_preference::SourcePreference;
use prefs::user_prefs::UserPrefs;
use price_map::PriceMap;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it reads
/// env vars, falling back to in-code defaults.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    let asset_host = AssetHost::from_env()?;
    Ok(UserPrefs::new(asset_host, SourcePreference::from_env()))
}

/// Returns the latest pair -> price mapping from the configured provider.
#[post("/api/pair_prices")]
pub async fn pair_prices() -> Result<PriceMap, ApiError> {
    let source = SourcePreference::from_env();
    price_caching::get_cached_pair_prices(&source).await
}
