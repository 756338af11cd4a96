//! Environment configuration record.
//!
//! Reads `config/<profile>.toml` relative to the current working directory,
//! then applies `COFFEESHOP_API_URL`, `COFFEESHOP_CALLBACK_URL` and
//! `COFFEESHOP_LOG_LEVEL` env overrides. The resolved [`Environment`] is
//! immutable — bootstrap code loads it once and hands out clones or
//! references.
//!
//! # Module layout
//!
//! - **types** — Public structs consumed by application bootstrap code
//!   (`Environment`, `Auth0Config`) plus validation and derived URLs.
//! - **raw** — Raw TOML deserialization types (`RawEnvironment`, `RawAuth0`).
//!   These mirror the file shape and use serde defaults; kept private.
//! - **profile** — Deployment profile selection (`development`/`production`).
//! - **load** — Loading logic: `merge_toml`, `load_raw_merged`, `load`,
//!   `load_from`, `expand_home`.

mod load;
mod profile;
mod raw;
mod types;

pub use load::{expand_home, load, load_from};
pub use profile::Profile;
pub use types::{Auth0Config, Environment};

#[cfg(test)]
impl Environment {
    /// Development `Environment` for unit tests — the tenant's registered
    /// local values, no file access.
    pub fn test_default() -> Self {
        Self {
            production: false,
            api_server_url: "http://127.0.0.1:5000".into(),
            log_level: "info".into(),
            auth0: Auth0Config {
                url: "dev-jnnv8d0c.us".into(),
                audience: "drinks_api".into(),
                client_id: "cVQ6zma5tNzgGxZPMRsAh2MF9hlzrnCx".into(),
                callback_url: "http://127.0.0.1:8100".into(),
            },
        }
    }
}
