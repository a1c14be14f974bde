use serde::Deserialize;
use serde::Serialize;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetHostError {
    #[error("invalid asset port '{0}'")]
    InvalidPort(String),
}

/// Where per-currency icons are served from.
///
/// Icons live at `http://<host>:<port>/public/images/<code>.png`, with the
/// currency code lowercased.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AssetHost {
    host: String,
    port: u16,
}

impl AssetHost {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 9999;

    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Creates an AssetHost from environment variables.
    ///
    /// # Environment Variables
    /// - `PRICES_ASSET_HOST`: host name or IP. defaults to 127.0.0.1
    /// - `PRICES_ASSET_PORT`: TCP port. defaults to 9999
    ///
    /// An unparseable port is an error rather than a silent fallback, so a
    /// typo does not quietly point every icon at the wrong server.
    pub fn from_env() -> Result<Self, AssetHostError> {
        let host = env::var("PRICES_ASSET_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_HOST.to_string());

        let port = match env::var("PRICES_ASSET_PORT") {
            Ok(val) => val
                .trim()
                .parse()
                .map_err(|_| AssetHostError::InvalidPort(val))?,
            Err(_) => Self::DEFAULT_PORT,
        };

        Ok(Self::new(host, port))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the icon URL for a currency code such as `BTC`.
    pub fn icon_url(&self, code: &str) -> String {
        format!(
            "http://{}:{}/public/images/{}.png",
            self.host,
            self.port,
            code.to_lowercase()
        )
    }
}

impl Default for AssetHost {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST, Self::DEFAULT_PORT)
    }
}
