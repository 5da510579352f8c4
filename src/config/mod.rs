use crate::errors::{AppError, AppResult};
use crate::models::shift::BreakInterval;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// A named shift with its schedule and production target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftPreset {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub target_parts: u32,
    pub cycle_time_seconds: f64,
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_form_id")]
    pub default_form_id: i64,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_shifts")]
    pub shifts: Vec<ShiftPreset>,
}

fn default_form_id() -> i64 {
    1
}
fn default_cache_ttl() -> u64 {
    30
}
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_shifts() -> Vec<ShiftPreset> {
    vec![
        ShiftPreset {
            name: "A".to_string(),
            start_time: "06:00".to_string(),
            end_time: "14:00".to_string(),
            target_parts: 1400,
            cycle_time_seconds: 18.0,
            breaks: vec![
                BreakInterval::new("Coffee", "09:00", "09:10"),
                BreakInterval::new("Lunch", "11:30", "12:00"),
            ],
        },
        ShiftPreset {
            name: "B".to_string(),
            start_time: "14:00".to_string(),
            end_time: "22:00".to_string(),
            target_parts: 1400,
            cycle_time_seconds: 18.0,
            breaks: vec![
                BreakInterval::new("Coffee", "17:00", "17:10"),
                BreakInterval::new("Dinner", "19:30", "20:00"),
            ],
        },
        ShiftPreset {
            name: "C".to_string(),
            start_time: "22:00".to_string(),
            end_time: "06:00".to_string(),
            target_parts: 1300,
            cycle_time_seconds: 20.0,
            breaks: vec![BreakInterval::new("Night meal", "02:00", "02:30")],
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_form_id: default_form_id(),
            cache_ttl_seconds: default_cache_ttl(),
            log_level: default_log_level(),
            shifts: default_shifts(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `RSHIFTCHART_HOME` overrides it.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("RSHIFTCHART_HOME") {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rshiftchart")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rshiftchart")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshiftchart.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rshiftchart.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Look up a shift preset by name (case-insensitive).
    pub fn preset(&self, name: &str) -> AppResult<&ShiftPreset> {
        self.shifts
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::UnknownPreset(name.to_string()))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("cannot create database {}: {}", db_path.display(), e),
                )
            })?;
        }

        Ok(config)
    }
}
