use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use pharmacy_core::models::EXPIRY_WINDOW_DAYS;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "config.json";
const DB_FILENAME: &str = "pharmacy.db";

/// Configuration for the CLI, stored as JSON in the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PharmacyConfig {
    /// SQLite file holding the collections
    pub db_path: Option<PathBuf>,

    /// Where exports are written when no `--out` is given
    pub export_dir: Option<PathBuf>,

    /// Days ahead that count as "expiring soon"
    pub expiry_window_days: i64,
}

impl Default for PharmacyConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            export_dir: None,
            expiry_window_days: EXPIRY_WINDOW_DAYS,
        }
    }
}

impl PharmacyConfig {
    /// Load config from `path`, or from the default location. A missing
    /// file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match project_dirs() {
                Some(dirs) => dirs.config_dir().join(CONFIG_FILENAME),
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("reading config {}", config_path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", config_path.display()))?;
        Ok(config)
    }

    /// Database path: explicit override, then config, then the data dir.
    pub fn resolve_db_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path.or(self.db_path.as_deref()) {
            return Ok(path.to_path_buf());
        }

        let dirs = project_dirs().context("could not determine a data directory; pass --db")?;
        let data_dir = dirs.data_dir();
        fs::create_dir_all(data_dir)
            .with_context(|| format!("creating data directory {}", data_dir.display()))?;
        Ok(data_dir.join(DB_FILENAME))
    }

    /// Export directory: explicit override, then config, then the current dir.
    pub fn resolve_export_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .or(self.export_dir.as_deref())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "pharmacy")
}
