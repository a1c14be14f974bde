//! User-facing settings, read from the environment and served to the client.

pub mod asset_host;
pub mod source_preference;
pub mod user_prefs;
