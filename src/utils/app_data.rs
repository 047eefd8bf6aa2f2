use crate::query::DEFAULT_LIMIT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "vxi";
const CONFIG_FILE: &str = "config.json";
const INDEX_FILE: &str = "search_index.json";
const BIBLE_FILE: &str = "bible.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Maximum number of search results shown
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Search index location; `<app data>/search_index.json` when unset
    #[serde(default)]
    pub index_path: Option<PathBuf>,

    /// Bible text used for hydration and passage display;
    /// a single JSON file or a directory of per-book files
    #[serde(default)]
    pub bible_path: Option<PathBuf>,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            index_path: None,
            bible_path: None,
            color: default_color(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from an explicit path, or return default if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(&config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Index path to use: explicit override, then config, then app data default
    pub fn resolve_index_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        match explicit.or_else(|| self.index_path.clone()) {
            Some(path) => Ok(path),
            None => Ok(get_app_data_dir()?.join(INDEX_FILE)),
        }
    }

    /// Bible path to use: explicit override, then config, then app data default
    pub fn resolve_bible_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        match explicit.or_else(|| self.bible_path.clone()) {
            Some(path) => Ok(path),
            None => Ok(get_app_data_dir()?.join(BIBLE_FILE)),
        }
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}
