use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use serde::Deserialize;
use crate::common::{LedgerError, LedgerResult};

const APP_DIR: &str = "tradebook";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_STORE_DIR: &str = ".tradebook";
const DEFAULT_STORE_FILE: &str = "trades.json";

/// Settings read from `config.toml`
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Location of the trade store
    pub(crate) store_path: Option<PathBuf>,
}

impl Config {
    pub(crate) fn empty() -> Config {
        Config::default()
    }

    /// Read config from `file_path`. A missing file gives an empty config.
    pub(crate) fn load_from_file(file_path: &Path) -> LedgerResult<Config> {
        if !file_path.is_file() {
            debug!("No config file at {}", file_path.display());
            return Ok(Config::empty());
        }

        let config_error = |reason: String| LedgerError::Config { path: file_path.to_path_buf(), reason };
        let content = fs::read_to_string(file_path).map_err(|e| config_error(e.to_string()))?;
        toml::from_str::<Config>(&content).map_err(|e| config_error(e.to_string()))
    }

    /// Store location, `--store` first, then the config file, then `~/.tradebook/trades.json`.
    pub(crate) fn resolve_store_path(&self, cli_store: Option<PathBuf>) -> PathBuf {
        cli_store
            .or_else(|| self.store_path.clone())
            .unwrap_or_else(default_store_path)
    }
}

pub(crate) fn default_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(CONFIG_FILE);
    path
}

pub(crate) fn default_store_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(DEFAULT_STORE_DIR);
    path.push(DEFAULT_STORE_FILE);
    path
}
