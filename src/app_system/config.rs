//! Runtime configuration: defaults, then `dashboard.toml`, then `DASHBOARD_*` variables.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Capacity of each store actor's request channel.
    pub channel_buffer: usize,
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_filter: String,
    pub currency_symbol: String,
    /// JSON seed file; the bundled demo data is used when absent.
    pub seed_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            log_filter: "info".into(),
            currency_symbol: "₱".into(),
            seed_path: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

impl DashboardConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Override fields from environment-style lookups.
    pub fn apply_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = lookup("DASHBOARD_CHANNEL_BUFFER") {
            self.channel_buffer = match v.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DASHBOARD_CHANNEL_BUFFER",
                        value: v,
                    })
                }
            };
        }
        if let Some(v) = lookup("DASHBOARD_LOG_FILTER") {
            self.log_filter = v;
        }
        if let Some(v) = lookup("DASHBOARD_CURRENCY") {
            self.currency_symbol = v;
        }
        if let Some(v) = lookup("DASHBOARD_SEED_PATH") {
            self.seed_path = Some(PathBuf::from(v));
        }
        Ok(self)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::InvalidValue { key: "channel_buffer", value: "0".into() });
        }
        Ok(self)
    }
}

/// Load from `path` if it exists, then apply overrides from `lookup`.
pub fn load_config_from(
    path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<DashboardConfig, ConfigError> {
    let config = match fs::read_to_string(path) {
        Ok(raw) => DashboardConfig::from_toml_str(&raw)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => DashboardConfig::default(),
        Err(source) => return Err(ConfigError::Io { path: path.to_path_buf(), source }),
    };
    config.apply_env(lookup)?.validate()
}

pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    load_config_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config_from(Path::new("does/not/exist.toml"), env(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = DashboardConfig::from_toml_str("currency_symbol = \"PHP \"\nchannel_buffer = 8").unwrap();
        assert_eq!(config.currency_symbol, "PHP ");
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_env_overrides_file() {
        let config = DashboardConfig::from_toml_str("log_filter = \"warn\"")
            .unwrap()
            .apply_env(env(&[("DASHBOARD_LOG_FILTER", "debug"), ("DASHBOARD_SEED_PATH", "seed.json")]))
            .unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn test_invalid_buffer_rejected() {
        let err = DashboardConfig::default()
            .apply_env(env(&[("DASHBOARD_CHANNEL_BUFFER", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DASHBOARD_CHANNEL_BUFFER", .. }));

        let err = DashboardConfig::from_toml_str("channel_buffer = 0").unwrap().validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_malformed_file_rejected() {
        assert!(matches!(DashboardConfig::from_toml_str("channel_buffer = \"x\""), Err(ConfigError::Parse(_))));
    }
}
