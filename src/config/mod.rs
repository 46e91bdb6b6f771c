use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const WORKSPACE_DIR_NAME: &str = ".certfolio";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Workspace directory - computed from home, not serialized
    #[serde(skip)]
    pub workspace_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Alert feed horizon in days.
    #[serde(default = "default_alert_window_days")]
    pub alert_window_days: i64,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_alert_window_days() -> i64 {
    crate::expiry::DEFAULT_ALERT_WINDOW_DAYS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,

    /// Rows shown per dashboard section.
    #[serde(default = "default_dashboard_rows")]
    pub dashboard_rows: usize,
}

fn default_true() -> bool {
    true
}

fn default_dashboard_rows() -> usize {
    5
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            dashboard_rows: default_dashboard_rows(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_dir: PathBuf::new(),
            config_path: PathBuf::new(),
            alert_window_days: default_alert_window_days(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load `~/.certfolio/config.toml`, writing a default file first if none
    /// exists yet.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new().context("Could not determine home directory")?;
        let workspace_dir = home.home_dir().join(WORKSPACE_DIR_NAME);
        Self::load_or_init_at(&workspace_dir)
    }

    /// Same as [`Config::load_or_init`] with an explicit workspace directory.
    pub fn load_or_init_at(workspace_dir: &Path) -> Result<Self> {
        let config_path = workspace_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", config_path.display()))?
        } else {
            let config = Self::default();
            fs::create_dir_all(workspace_dir).with_context(|| {
                format!(
                    "Failed to create workspace directory: {}",
                    workspace_dir.display()
                )
            })?;
            let toml = toml::to_string_pretty(&config)?;
            fs::write(&config_path, toml)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
            config
        };

        config.workspace_dir = workspace_dir.to_path_buf();
        config.config_path = config_path;
        Ok(config)
    }
}
