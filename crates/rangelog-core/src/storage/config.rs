//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Trend smoothing (moving-average window)
//! - Wedge ladder defaults (distance range)
//! - Display settings (recent-activity length)
//! - An optional custom grading scale
//!
//! Configuration is stored at `~/.config/rangelog/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::grading::GradeScale;

use super::data_dir;

/// Trend smoothing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Window for moving averages on history charts.
    #[serde(default = "default_window")]
    pub moving_average_window: usize,
}

/// Wedge ladder defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderConfigDefaults {
    #[serde(default = "default_ladder_start")]
    pub start_yards: u32,
    #[serde(default = "default_ladder_end")]
    pub end_yards: u32,
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows shown by the recent-activity feed.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/rangelog/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub trend: TrendConfig,
    #[serde(default)]
    pub ladder: LadderConfigDefaults,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Custom grading scale override for the wedge ladder.
    #[serde(default)]
    pub custom_grade_scale: Option<GradeScale>,
}

fn default_window() -> usize {
    3
}
fn default_ladder_start() -> u32 {
    40
}
fn default_ladder_end() -> u32 {
    120
}
fn default_recent_limit() -> usize {
    10
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            moving_average_window: default_window(),
        }
    }
}

impl Default for LadderConfigDefaults {
    fn default() -> Self {
        Self {
            start_yards: default_ladder_start(),
            end_yards: default_ladder_end(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trend: TrendConfig::default(),
            ladder: LadderConfigDefaults::default(),
            display: DisplayConfig::default(),
            custom_grade_scale: None,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    ConfigError::LoadFailed {
                        path,
                        message: e.to_string(),
                    }
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// The grading scale in effect: the custom override or the default.
    pub fn grade_scale(&self) -> GradeScale {
        self.custom_grade_scale.clone().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value cannot be
    /// parsed into the existing value's type, or the save fails.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }
}

fn get_json_value_by_path<'a>(
    root: &'a serde_json::Value,
    key: &str,
) -> Option<&'a serde_json::Value> {
    if key.is_empty() {
        return None;
    }
    let mut current = root;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn set_json_value_by_path(root: &mut serde_json::Value, key: &str, value: &str) -> Result<()> {
    let unknown = || ConfigError::InvalidValue {
        key: key.to_string(),
        message: "unknown config key".to_string(),
    };

    let mut parts = key.split('.').peekable();
    if parts.peek().is_none() {
        return Err(unknown().into());
    }

    let mut current = root;
    while let Some(part) = parts.next() {
        let is_leaf = parts.peek().is_none();
        if is_leaf {
            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let parse_err = |message: String| ConfigError::InvalidValue {
                key: key.to_string(),
                message,
            };
            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| parse_err(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => {
                    if let Ok(n) = value.parse::<u64>() {
                        serde_json::Value::Number(n.into())
                    } else if let Ok(n) = value.parse::<f64>() {
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| parse_err(format!("cannot parse '{value}' as number")))?
                    } else {
                        return Err(parse_err(format!("cannot parse '{value}' as number")).into());
                    }
                }
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| parse_err(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        current = current.get_mut(part).ok_or_else(unknown)?;
    }

    Err(unknown().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.trend.moving_average_window, 3);
        assert_eq!(cfg.ladder.start_yards, 40);
        assert_eq!(cfg.ladder.end_yards, 120);
        assert_eq!(cfg.display.recent_limit, 10);
        assert_eq!(cfg.grade_scale().tolerances, vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_toml_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.trend.moving_average_window, 3);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[trend]\nmoving_average_window = 5\n").unwrap();
        assert_eq!(parsed.trend.moving_average_window, 5);
        assert_eq!(parsed.ladder.start_yards, 40);
    }

    #[test]
    fn test_get_by_path() {
        let cfg = Config::default();
        assert_eq!(cfg.get("trend.moving_average_window").as_deref(), Some("3"));
        assert_eq!(cfg.get("ladder.end_yards").as_deref(), Some("120"));
        assert_eq!(cfg.get("nope.nothing"), None);
    }

    #[test]
    fn test_set_by_path_in_memory() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        set_json_value_by_path(&mut json, "trend.moving_average_window", "7").unwrap();
        let cfg: Config = serde_json::from_value(json).unwrap();
        assert_eq!(cfg.trend.moving_average_window, 7);
    }

    #[test]
    fn test_set_unknown_key_rejected() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(set_json_value_by_path(&mut json, "trend.bogus", "1").is_err());
        assert!(set_json_value_by_path(&mut json, "", "1").is_err());
    }

    #[test]
    fn test_set_bad_number_rejected() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(
            set_json_value_by_path(&mut json, "trend.moving_average_window", "lots").is_err()
        );
    }
}
