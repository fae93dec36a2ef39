use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Error type for config reading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read `config.toml` from the store directory. A missing file means the
/// user never customized anything and yields the defaults.
pub fn read_config(store_dir: &Path) -> Result<AppConfig, ConfigError> {
    let config_path = store_dir.join("config.toml");
    if !config_path.exists() {
        return Ok(AppConfig::default());
    }
    let config_text = fs::read_to_string(&config_path).map_err(|e| ConfigError::Read {
        path: config_path.clone(),
        source: e,
    })?;
    let config: AppConfig = toml::from_str(&config_text)?;
    Ok(config)
}
