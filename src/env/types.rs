//! Public environment types.
//!
//! These are the resolved, ready-to-use structs that application bootstrap
//! code consumes. Raw TOML deserialization types live in `raw.rs`.
//!
//! Serialization uses the field spelling the rest of the stack expects
//! (`apiServerUrl`, `clientId`, `callbackURL`), so `--json` output can be
//! fed straight to the front-end build.

use serde::Serialize;
use url::Url;

use crate::error::AppError;

/// Identity-provider (Auth0) settings.
#[derive(Debug, Clone, Serialize)]
pub struct Auth0Config {
    /// Auth0 tenant domain prefix (e.g. `dev-jnnv8d0c.us`) — no scheme, no path.
    pub url: String,
    /// API audience identifier access tokens are requested for.
    pub audience: String,
    /// Client identifier registered with the tenant.
    #[serde(rename = "clientId")]
    pub client_id: String,
    /// Post-login redirect target (base URL of the running front end).
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl Auth0Config {
    /// Full tenant domain, e.g. `dev-jnnv8d0c.us.auth0.com`.
    pub fn domain(&self) -> String {
        format!("{}.auth0.com", self.url)
    }

    /// Expected token issuer, e.g. `https://dev-jnnv8d0c.us.auth0.com/`.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    /// JWKS endpoint the API verifies token signatures against.
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.domain())
    }

    /// Hosted-login URL the front end sends users to.
    ///
    /// Query parameters are percent-encoded by the `Url` builder, so values
    /// containing reserved characters survive the round trip.
    pub fn authorize_url(&self) -> Result<Url, AppError> {
        let mut url = Url::parse(&format!("https://{}/authorize", self.domain()))
            .map_err(|e| AppError::Config(format!("cannot build authorize url: {e}")))?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url);
        Ok(url)
    }
}

/// Fully-resolved environment configuration record.
///
/// Constructed once at startup by [`crate::env::load`]; immutable afterwards.
/// Any number of readers may share it without coordination.
#[derive(Debug, Clone, Serialize)]
pub struct Environment {
    /// Build-mode flag. `false` for development profiles, `true` for production.
    pub production: bool,
    /// Base URL of the backend API.
    #[serde(rename = "apiServerUrl")]
    pub api_server_url: String,
    /// Identity-provider settings.
    pub auth0: Auth0Config,
    /// Log level for this deployment — consumed by the CLI, not part of the
    /// record the front end sees.
    #[serde(skip)]
    pub log_level: String,
}

impl Environment {
    /// Check the record's invariants, returning the first offending field.
    ///
    /// Deployment tooling runs this before bundling; library consumers may
    /// call it again after applying their own overrides.
    pub fn validate(&self) -> Result<(), AppError> {
        require_http_url("api_server_url", &self.api_server_url)?;
        require_non_empty("auth0.url", &self.auth0.url)?;
        if self.auth0.url.contains('/') || self.auth0.url.contains(char::is_whitespace) {
            return Err(AppError::Config(format!(
                "auth0.url must be a bare domain prefix, got '{}'",
                self.auth0.url
            )));
        }
        require_non_empty("auth0.audience", &self.auth0.audience)?;
        require_non_empty("auth0.client_id", &self.auth0.client_id)?;
        require_http_url("auth0.callback_url", &self.auth0.callback_url)?;
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Config(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_http_url(field: &str, value: &str) -> Result<(), AppError> {
    let parsed = Url::parse(value)
        .map_err(|e| AppError::Config(format!("{field} is not a valid URL ('{value}'): {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::Config(format!(
            "{field} must use http or https, got '{other}'"
        ))),
    }
}
