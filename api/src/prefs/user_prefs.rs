use super::asset_host::AssetHost;
use super::source_preference::SourcePreference;
use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs. Intended for saving to a file, editing in a settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    asset_host: AssetHost,
    source: SourcePreference,
}

impl UserPrefs {
    pub fn new(asset_host: AssetHost, source: SourcePreference) -> Self {
        Self { asset_host, source }
    }

    pub fn asset_host(&self) -> &AssetHost {
        &self.asset_host
    }

    pub fn source(&self) -> &SourcePreference {
        &self.source
    }
}
