//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Relog reads an optional `relog.toml` at the repository root. A missing
//! file yields defaults; `$RELOG_CONFIG` overrides the location. Values are
//! validated per command: tracker lookups need `[tracker]` coordinates,
//! release notes need `[release]` artifact settings.
//!
//! # Example
//!
//! ```toml
//! [tracker]
//! owner = "acme"
//! repo = "widget"
//!
//! [release]
//! product = "Widget"
//! asset_base = "https://github.com/acme/widget/releases/download/v{version}/"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name at the repository root.
pub const CONFIG_FILE: &str = "relog.toml";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "RELOG_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Issue tracker coordinates
    pub tracker: TrackerConfig,

    /// Release artifact settings for the notes command
    pub release: ReleaseConfig,
}

/// Issue tracker identification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// API base URL override (GitHub Enterprise)
    pub api_base: Option<String>,
}

/// Release download settings.
///
/// File name templates substitute `{product}` and `{version}`; the asset
/// base substitutes `{version}` with `+` percent-encoded for the URL path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// Product name substituted for `{product}`
    pub product: String,

    /// Release-asset base URL template
    pub asset_base: String,

    /// Build version override; defaults to the target tag minus its `v`
    pub version: Option<String>,

    /// Standard installer file name template
    pub installer: String,

    /// Admin (all users) installer file name template
    pub admin_installer: String,

    /// CLI installer file name template
    pub cli_installer: String,

    /// CLI admin installer file name template
    pub cli_admin_installer: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            product: String::new(),
            asset_base: String::new(),
            version: None,
            installer: "{product}_{version}_signed.exe".to_string(),
            admin_installer: "{product}_{version}_admin_signed.exe".to_string(),
            cli_installer: "{product}_CLI_{version}_signed.exe".to_string(),
            cli_admin_installer: "{product}_CLI_{version}_admin_signed.exe".to_string(),
        }
    }
}

impl Config {
    /// Load configuration for a repository directory.
    ///
    /// Returns defaults when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file exists but cannot be read or
    /// parsed.
    pub fn load(repo_dir: &Path) -> Result<Self, ConfigError> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(p) => PathBuf::from(p),
            None => repo_dir.join(CONFIG_FILE),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Validate settings needed for tracker lookups.
    pub fn validate_tracker(&self) -> Result<(), ConfigError> {
        if self.tracker.owner.is_empty() || self.tracker.repo.is_empty() {
            return Err(ConfigError::InvalidValue(
                "tracker lookups need [tracker] owner and repo (or pass --no-fetch)".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate settings needed for the release downloads section.
    pub fn validate_release(&self) -> Result<(), ConfigError> {
        if self.release.product.is_empty() {
            return Err(ConfigError::InvalidValue(
                "release notes need [release] product".to_string(),
            ));
        }
        if !self.release.asset_base.contains("{version}") {
            return Err(ConfigError::InvalidValue(
                "[release] asset_base must contain a {version} placeholder".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
[tracker]
owner = "acme"
repo = "widget"

[release]
product = "Widget"
asset_base = "https://github.com/acme/widget/releases/download/v{version}/"
"#;

    #[test]
    fn parses_example_config() {
        let config: Config = toml::from_str(EXAMPLE).unwrap();
        assert_eq!(config.tracker.owner, "acme");
        assert_eq!(config.tracker.repo, "widget");
        assert_eq!(config.release.product, "Widget");
        // Unset fields fall back to template defaults.
        assert_eq!(config.release.installer, "{product}_{version}_signed.exe");
        assert!(config.validate_tracker().is_ok());
        assert!(config.validate_release().is_ok());
    }

    #[test]
    fn defaults_fail_command_validation() {
        let config = Config::default();
        assert!(config.validate_tracker().is_err());
        assert!(config.validate_release().is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Config, _> = toml::from_str("[tracker]\nonwer = \"typo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn asset_base_requires_version_placeholder() {
        let mut config: Config = toml::from_str(EXAMPLE).unwrap();
        config.release.asset_base = "https://example.com/static/".to_string();
        assert!(config.validate_release().is_err());
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let dir = std::env::temp_dir().join("relog-config-missing");
        let config = Config::load(&dir).unwrap();
        assert_eq!(config, Config::default());
    }
}
