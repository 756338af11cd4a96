//! Environment loading with env-var overrides.
//!
//! Reads profile-named TOML files, supports `[meta] base = "..."` overlay
//! chains, and applies `COFFEESHOP_API_URL`, `COFFEESHOP_CALLBACK_URL` and
//! `COFFEESHOP_LOG_LEVEL` env overrides.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

use super::profile::Profile;
use super::raw::{self, RawEnvironment};
use super::types::{Auth0Config, Environment};

/// Deep-merge two TOML values.
/// Tables are merged recursively — the overlay only needs to specify keys that
/// differ from the base. For every other type (string, boolean, array, …)
/// the overlay value replaces the base value wholesale.
fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_tbl), toml::Value::Table(overlay_tbl)) => {
            for (key, ov_val) in overlay_tbl {
                let merged = match base_tbl.remove(&key) {
                    Some(base_val) => merge_toml(base_val, ov_val),
                    None => ov_val,
                };
                base_tbl.insert(key, merged);
            }
            toml::Value::Table(base_tbl)
        }
        (_, overlay) => overlay,
    }
}

/// Read a profile file, follow any `[meta] base = "..."` chain, and return the
/// fully merged `toml::Value`. `visited` carries canonicalized paths already
/// seen in this chain so circular references are caught early.
fn load_raw_merged(
    path: &Path,
    visited: &mut HashSet<PathBuf>,
) -> Result<toml::Value, AppError> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical) {
        return Err(AppError::Config(format!(
            "circular base reference detected at: {}",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let overlay_val: toml::Value = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    if let Some(base_str) = overlay_val
        .get("meta")
        .and_then(|m| m.get("base"))
        .and_then(|b| b.as_str())
    {
        let base_path = if Path::new(base_str).is_absolute() {
            PathBuf::from(base_str)
        } else {
            path.parent().unwrap_or(Path::new(".")).join(base_str)
        };
        let base_val = load_raw_merged(&base_path, visited)?;
        Ok(merge_toml(base_val, overlay_val))
    } else {
        Ok(overlay_val)
    }
}

/// Load the environment for the selected profile, then apply env-var overrides.
///
/// Profile selection: `profile_arg` (CLI) wins over `COFFEESHOP_PROFILE`;
/// both default to `development`. An explicit `config_path` bypasses profile
/// file lookup entirely (the file still decides the `production` flag).
///
/// If `config/development.toml` does not exist, the development profile falls
/// back to the built-in defaults. The production profile never falls back —
/// a missing file is a deployment error.
pub fn load(config_path: Option<&str>, profile_arg: Option<&str>) -> Result<Environment, AppError> {
    let profile_env = env::var("COFFEESHOP_PROFILE").ok();
    let api_url_override = env::var("COFFEESHOP_API_URL").ok();
    let callback_url_override = env::var("COFFEESHOP_CALLBACK_URL").ok();
    let log_level_override = env::var("COFFEESHOP_LOG_LEVEL").ok();

    load_in(
        Path::new("config"),
        config_path,
        profile_arg,
        profile_env.as_deref(),
        api_url_override.as_deref(),
        callback_url_override.as_deref(),
        log_level_override.as_deref(),
    )
}

/// Directory-parameterized loader behind [`load`].
/// Tests point `config_dir` at a tempdir and pass profile/overrides directly
/// instead of touching cwd or process env.
pub(crate) fn load_in(
    config_dir: &Path,
    config_path: Option<&str>,
    profile_arg: Option<&str>,
    profile_env: Option<&str>,
    api_url_override: Option<&str>,
    callback_url_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Environment, AppError> {
    let profile = match profile_arg.or(profile_env) {
        Some(s) => s.parse::<Profile>()?,
        None => Profile::default(),
    };

    if let Some(path) = config_path {
        return load_from(
            &expand_home(path),
            api_url_override,
            callback_url_override,
            log_level_override,
        );
    }

    let profile_path = config_dir.join(profile.file_name());
    if profile_path.exists() {
        load_from(
            &profile_path,
            api_url_override,
            callback_url_override,
            log_level_override,
        )
    } else if profile.is_production() {
        Err(AppError::Config(format!(
            "production profile requires {}",
            profile_path.display()
        )))
    } else {
        // Built-in development defaults — same values the raw serde defaults carry.
        let parsed = RawEnvironment {
            production: false,
            api_server_url: raw::default_api_server_url(),
            log_level: raw::default_log_level(),
            auth0: Default::default(),
        };
        Ok(resolve(
            parsed,
            api_url_override,
            callback_url_override,
            log_level_override,
        ))
    }
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
/// Follows `[meta] base = "..."` overlay chains before resolving.
pub fn load_from(
    path: &Path,
    api_url_override: Option<&str>,
    callback_url_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Environment, AppError> {
    let merged_val = load_raw_merged(path, &mut HashSet::new())?;

    let parsed: RawEnvironment = Deserialize::deserialize(merged_val)
        .map_err(|e: toml::de::Error| {
            AppError::Config(format!("config error in {}: {e}", path.display()))
        })?;

    Ok(resolve(
        parsed,
        api_url_override,
        callback_url_override,
        log_level_override,
    ))
}

fn resolve(
    parsed: RawEnvironment,
    api_url_override: Option<&str>,
    callback_url_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Environment {
    Environment {
        production: parsed.production,
        api_server_url: api_url_override
            .map(str::to_string)
            .unwrap_or(parsed.api_server_url),
        log_level: log_level_override
            .map(str::to_string)
            .unwrap_or(parsed.log_level),
        auth0: Auth0Config {
            url: parsed.auth0.url,
            audience: parsed.auth0.audience,
            client_id: parsed.auth0.client_id,
            callback_url: callback_url_override
                .map(str::to_string)
                .unwrap_or(parsed.auth0.callback_url),
        },
    }
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
