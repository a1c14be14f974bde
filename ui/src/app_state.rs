use api::prefs::asset_host::AssetHost;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub asset_host: AssetHost,
    pub refresh_interval: Duration,
}

/// Settings fixed for the lifetime of the app, shared as a Dioxus context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(asset_host: AssetHost, refresh_interval: Duration) -> Self {
        Self(Arc::new(AppStateData {
            asset_host,
            refresh_interval,
        }))
    }
}
