use crate::errors::{AppError, AppResult};
use crate::store::PunchStore;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate;

pub const DEFAULT_WAGE: f64 = 20.0;
pub const MAX_WAGE: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_wage")]
    pub default_wage: f64,
    #[serde(default = "default_range_days")]
    pub default_range_days: u32,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_data_file() -> String {
    Config::data_file_default().to_string_lossy().to_string()
}
fn default_wage() -> f64 {
    DEFAULT_WAGE
}
fn default_range_days() -> u32 {
    7
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_wage: default_wage(),
            default_range_days: default_range_days(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpunch")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpunch")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpunch.conf")
    }

    /// Default location of the punch CSV
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join("rpunch_data.csv")
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Initialize configuration and the punch file.
    ///
    /// A relative `custom_file` is placed inside the config directory. In test
    /// mode the config file is left alone.
    pub fn init_all(custom_file: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let data_path = match custom_file {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::data_file_default(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // header-only punch file on first init
        if !data_path.exists() {
            PunchStore::new(&data_path).save(&Default::default())?;
        }

        Ok(config)
    }
}
