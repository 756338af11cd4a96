//! Raw TOML deserialization types.
//!
//! These structs mirror the TOML file shape and use `serde` defaults.
//! The `load` module converts them into the public `types` structs.
//! Field defaults are the development values registered with the Auth0
//! tenant, so a partial file still resolves to a runnable record.

use serde::Deserialize;

/// Raw TOML shape — serde target before resolution.
#[derive(Deserialize)]
pub(super) struct RawEnvironment {
    #[serde(default)]
    pub production: bool,
    #[serde(default = "default_api_server_url")]
    pub api_server_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub auth0: RawAuth0,
}

#[derive(Deserialize)]
pub(super) struct RawAuth0 {
    #[serde(default = "default_auth0_url")]
    pub url: String,
    #[serde(default = "default_auth0_audience")]
    pub audience: String,
    #[serde(default = "default_auth0_client_id")]
    pub client_id: String,
    #[serde(default = "default_auth0_callback_url")]
    pub callback_url: String,
}

impl Default for RawAuth0 {
    fn default() -> Self {
        Self {
            url: default_auth0_url(),
            audience: default_auth0_audience(),
            client_id: default_auth0_client_id(),
            callback_url: default_auth0_callback_url(),
        }
    }
}

// ── Default functions (used by serde) ────────────────────────────────────────

pub(super) fn default_api_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_auth0_url() -> String {
    "dev-jnnv8d0c.us".to_string()
}

pub(super) fn default_auth0_audience() -> String {
    "drinks_api".to_string()
}

pub(super) fn default_auth0_client_id() -> String {
    "cVQ6zma5tNzgGxZPMRsAh2MF9hlzrnCx".to_string()
}

pub(super) fn default_auth0_callback_url() -> String {
    "http://127.0.0.1:8100".to_string()
}
