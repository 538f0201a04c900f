//! TOML-based widget configuration.
//!
//! Stores the category map and the selection knobs:
//! - Time-of-day window boundaries
//! - Render interval and fade hints
//! - Random vs sequential picking, optional RNG seed
//! - Optional remote category file and mock date
//!
//! Configuration is stored at `~/.config/glimmer/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::categories::Categories;
use crate::error::{ConfigError, ValidationError};
use crate::greeting::GreetingStyle;
use crate::render::DEFAULT_CLASSES;
use crate::selector::TimeWindows;

/// Returns `~/.config/glimmer[-dev]/` based on GLIMMER_ENV.
///
/// Set GLIMMER_ENV=dev to use a development config directory.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("GLIMMER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("glimmer-dev")
    } else {
        base_dir.join("glimmer")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Widget configuration.
///
/// Serialized to/from TOML at `~/.config/glimmer/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Render period in milliseconds.
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,
    /// Optional path or URL fetched once at startup; on success it
    /// replaces `compliments` wholesale.
    #[serde(default)]
    pub remote_file: Option<String>,
    /// Transition hint passed to the display surface.
    #[serde(default = "default_fade_speed_ms")]
    pub fade_speed_ms: u64,
    #[serde(default = "default_morning_start")]
    pub morning_start_time: u32,
    #[serde(default = "default_morning_end")]
    pub morning_end_time: u32,
    #[serde(default = "default_afternoon_start")]
    pub afternoon_start_time: u32,
    #[serde(default = "default_afternoon_end")]
    pub afternoon_end_time: u32,
    /// Random picking (true) or sequential cycling (false).
    #[serde(default = "default_true")]
    pub random: bool,
    /// Overrides "today" for date-pattern matching (YYYY-MM-DD).
    #[serde(default)]
    pub mock_date: Option<String>,
    /// Styling classes passed to the display surface.
    #[serde(default = "default_classes")]
    pub classes: String,
    /// Which greeting policy handles face-recognition events.
    #[serde(default)]
    pub greeting: GreetingStyle,
    /// Fixed RNG seed for reproducible pick sequences.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Category map feeding the selector.
    ///
    /// Kept last so the TOML table serializes after the scalar values.
    #[serde(default = "Categories::default_set")]
    pub compliments: Categories,
}

// Default functions
fn default_update_interval_ms() -> u64 {
    15000
}
fn default_fade_speed_ms() -> u64 {
    4000
}
fn default_morning_start() -> u32 {
    3
}
fn default_morning_end() -> u32 {
    12
}
fn default_afternoon_start() -> u32 {
    12
}
fn default_afternoon_end() -> u32 {
    17
}
fn default_true() -> bool {
    true
}
fn default_classes() -> String {
    DEFAULT_CLASSES.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_interval_ms: default_update_interval_ms(),
            remote_file: None,
            fade_speed_ms: default_fade_speed_ms(),
            morning_start_time: default_morning_start(),
            morning_end_time: default_morning_end(),
            afternoon_start_time: default_afternoon_start(),
            afternoon_end_time: default_afternoon_end(),
            random: true,
            mock_date: None,
            classes: default_classes(),
            greeting: GreetingStyle::default(),
            rng_seed: None,
            compliments: Categories::default_set(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/glimmer"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// The time-of-day windows for the candidate builder.
    pub fn windows(&self) -> TimeWindows {
        TimeWindows {
            morning_start: self.morning_start_time,
            morning_end: self.morning_end_time,
            afternoon_start: self.afternoon_start_time,
            afternoon_end: self.afternoon_end_time,
        }
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("morning_start_time", self.morning_start_time),
            ("morning_end_time", self.morning_end_time),
            ("afternoon_start_time", self.afternoon_start_time),
            ("afternoon_end_time", self.afternoon_end_time),
        ] {
            if value > 24 {
                return Err(ValidationError::InvalidHour {
                    field: field.to_string(),
                    value,
                });
            }
        }
        if let Some(date) = &self.mock_date {
            chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
                ValidationError::InvalidValue {
                    field: "mock_date".to_string(),
                    message: format!("'{date}' is not a YYYY-MM-DD date"),
                }
            })?;
        }
        Ok(())
    }

    /// Get a scalar config value as a string by key.
    ///
    /// The category map is not addressable here; `config list` prints
    /// the whole document instead.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "update_interval_ms" => Some(self.update_interval_ms.to_string()),
            "remote_file" => Some(self.remote_file.clone().unwrap_or_default()),
            "fade_speed_ms" => Some(self.fade_speed_ms.to_string()),
            "morning_start_time" => Some(self.morning_start_time.to_string()),
            "morning_end_time" => Some(self.morning_end_time.to_string()),
            "afternoon_start_time" => Some(self.afternoon_start_time.to_string()),
            "afternoon_end_time" => Some(self.afternoon_end_time.to_string()),
            "random" => Some(self.random.to_string()),
            "mock_date" => Some(self.mock_date.clone().unwrap_or_default()),
            "classes" => Some(self.classes.clone()),
            "greeting" => Some(match self.greeting {
                GreetingStyle::Generic => "generic".to_string(),
                GreetingStyle::Fixed => "fixed".to_string(),
            }),
            "rng_seed" => Some(
                self.rng_seed
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a scalar config value by key. An empty value clears
    /// optional fields.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        match key {
            "update_interval_ms" => {
                self.update_interval_ms = value.parse().map_err(|_| invalid(value.into()))?;
            }
            "remote_file" => {
                self.remote_file = (!value.is_empty()).then(|| value.to_string());
            }
            "fade_speed_ms" => {
                self.fade_speed_ms = value.parse().map_err(|_| invalid(value.into()))?;
            }
            "morning_start_time" => {
                self.morning_start_time = value.parse().map_err(|_| invalid(value.into()))?;
            }
            "morning_end_time" => {
                self.morning_end_time = value.parse().map_err(|_| invalid(value.into()))?;
            }
            "afternoon_start_time" => {
                self.afternoon_start_time = value.parse().map_err(|_| invalid(value.into()))?;
            }
            "afternoon_end_time" => {
                self.afternoon_end_time = value.parse().map_err(|_| invalid(value.into()))?;
            }
            "random" => {
                self.random = value.parse().map_err(|_| invalid(value.into()))?;
            }
            "mock_date" => {
                self.mock_date = (!value.is_empty()).then(|| value.to_string());
            }
            "classes" => {
                self.classes = value.to_string();
            }
            "greeting" => {
                self.greeting = match value {
                    "generic" => GreetingStyle::Generic,
                    "fixed" => GreetingStyle::Fixed,
                    other => return Err(invalid(format!("unknown policy '{other}'"))),
                };
            }
            "rng_seed" => {
                self.rng_seed = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(|_| invalid(value.into()))?)
                };
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.validate().map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.update_interval_ms, 15000);
        assert_eq!(parsed.fade_speed_ms, 4000);
        assert!(parsed.random);
        assert_eq!(parsed.compliments, cfg.compliments);
    }

    #[test]
    fn empty_document_fills_every_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.morning_start_time, 3);
        assert_eq!(parsed.morning_end_time, 12);
        assert_eq!(parsed.afternoon_start_time, 12);
        assert_eq!(parsed.afternoon_end_time, 17);
        assert_eq!(parsed.classes, DEFAULT_CLASSES);
        assert!(parsed.compliments.contains("anytime"));
    }

    #[test]
    fn get_returns_scalar_values() {
        let cfg = Config::default();
        assert_eq!(cfg.get("random").as_deref(), Some("true"));
        assert_eq!(cfg.get("update_interval_ms").as_deref(), Some("15000"));
        assert_eq!(cfg.get("greeting").as_deref(), Some("generic"));
        assert!(cfg.get("no_such_key").is_none());
    }

    #[test]
    fn set_updates_and_validates() {
        let mut cfg = Config::default();
        cfg.set("random", "false").unwrap();
        assert!(!cfg.random);
        cfg.set("morning_end_time", "11").unwrap();
        assert_eq!(cfg.morning_end_time, 11);
        assert!(cfg.set("morning_end_time", "25").is_err());
        assert!(cfg.set("random", "maybe").is_err());
        assert!(matches!(
            cfg.set("nonexistent", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_clears_optionals_on_empty_value() {
        let mut cfg = Config::default();
        cfg.set("mock_date", "2024-01-01").unwrap();
        assert_eq!(cfg.mock_date.as_deref(), Some("2024-01-01"));
        cfg.set("mock_date", "").unwrap();
        assert!(cfg.mock_date.is_none());
    }

    #[test]
    fn validate_rejects_malformed_mock_date() {
        let mut cfg = Config::default();
        cfg.mock_date = Some("January 1st".into());
        assert!(cfg.validate().is_err());
        cfg.mock_date = Some("2024-01-01".into());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn save_and_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.set("random", "false").unwrap();
        cfg.set("greeting", "fixed").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.random);
        assert_eq!(loaded.greeting, GreetingStyle::Fixed);
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "random = definitely").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
