use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output used by `analyze` when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// chrono format string for dates in table output.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Colorize table output.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_format() -> String {
    "table".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            date_format: default_date_format(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("gapinspect")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".gapinspect")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gapinspect.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the default configuration to `path`, creating parent dirs.
    ///
    /// In test mode nothing is written.
    pub fn init_at(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = Config::default();

        if is_test {
            return Ok(config);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(config)
    }
}
