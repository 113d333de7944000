//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::sort::Algorithm;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const MAX_DELAY_MS: u64 = 2000;
pub const MIN_ARRAY_SIZE: usize = 1;
pub const MAX_ARRAY_SIZE: usize = 200;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub visualizer: VisualizerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Clamp values that would otherwise break array generation or pacing.
    pub fn normalize(&mut self) {
        let v = &mut self.visualizer;
        v.delay_ms = v.delay_ms.min(MAX_DELAY_MS);
        v.array_size = v.array_size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
        if v.min_value > v.max_value {
            std::mem::swap(&mut v.min_value, &mut v.max_value);
        }
        self.ui.max_messages = self.ui.max_messages.max(1);
    }
}

/// Array and pacing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Pause after each step, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_array_size")]
    pub array_size: usize,
    /// Smallest value of a random array (inclusive).
    #[serde(default = "default_min_value")]
    pub min_value: i64,
    /// Largest value of a random array (inclusive).
    #[serde(default = "default_max_value")]
    pub max_value: i64,
    /// Algorithm preselected at startup.
    #[serde(default)]
    pub algorithm: Option<Algorithm>,
}

impl VisualizerConfig {
    pub fn value_range(&self) -> RangeInclusive<i64> {
        self.min_value..=self.max_value
    }
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            array_size: default_array_size(),
            min_value: default_min_value(),
            max_value: default_max_value(),
            algorithm: None,
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
    /// Print each value under its bar when there is room.
    #[serde(default)]
    pub show_values: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            max_messages: default_max_messages(),
            show_values: false,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_delay_ms() -> u64 {
    200
}
fn default_array_size() -> usize {
    50
}
fn default_min_value() -> i64 {
    10
}
fn default_max_value() -> i64 {
    309
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_max_messages() -> usize {
    200
}
fn default_log_dir() -> String {
    "~/.local/share/sortviz/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.visualizer.delay_ms, 200);
        assert_eq!(config.visualizer.array_size, 50);
        assert_eq!(config.visualizer.value_range(), 10..=309);
        assert_eq!(config.visualizer.algorithm, None);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [visualizer]
            delay_ms = 15
            algorithm = "merge"

            [ui]
            show_values = true
            "#,
        )
        .unwrap();
        assert_eq!(config.visualizer.delay_ms, 15);
        assert_eq!(config.visualizer.array_size, 50);
        assert_eq!(config.visualizer.algorithm, Some(Algorithm::Merge));
        assert!(config.ui.show_values);
        assert_eq!(config.ui.max_messages, 200);
    }

    #[test]
    fn test_normalize_clamps() {
        let mut config = AppConfig::default();
        config.visualizer.delay_ms = 99_999;
        config.visualizer.array_size = 0;
        config.visualizer.min_value = 50;
        config.visualizer.max_value = 5;
        config.normalize();
        assert_eq!(config.visualizer.delay_ms, MAX_DELAY_MS);
        assert_eq!(config.visualizer.array_size, MIN_ARRAY_SIZE);
        assert_eq!(config.visualizer.value_range(), 5..=50);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.visualizer.algorithm = Some(Algorithm::Quick);
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.visualizer.algorithm, Some(Algorithm::Quick));
        assert_eq!(back.visualizer.delay_ms, config.visualizer.delay_ms);
    }
}
