//! Deployment profile selection.
//!
//! A profile names which configuration file ships with a build:
//! `config/development.toml` or `config/production.toml`.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Target deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Development,
    Production,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }

    /// File name of the profile's config under the `config/` directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Profile::Development => "development.toml",
            Profile::Production => "production.toml",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Profile::Production)
    }
}

impl FromStr for Profile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            other => Err(AppError::Config(format!(
                "unknown profile '{other}' (expected 'development' or 'production')"
            ))),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
