use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use workout_editor::EditorDefaults;

pub const DEFAULT_CONFIG_NAME: &str = "workout.config.json";

/// Workout CLI configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Values given to blocks, supersets and exercises created by edits
    #[serde(default)]
    pub defaults: EditorDefaults,

    /// Maximum undo history kept while applying a script (0 = unlimited)
    #[serde(default = "default_undo_levels")]
    pub undo_levels: usize,

    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_undo_levels() -> usize {
    100
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: EditorDefaults::default(),
            undo_levels: default_undo_levels(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "defaults": { "supersetRestSec": 75, "exerciseReps": 12 },
            "undoLevels": 20,
            "logLevel": "debug"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.defaults.superset_rest_sec, 75);
        assert_eq!(config.defaults.exercise_reps, 12);
        assert_eq!(config.defaults.exercise_sets, 3);
        assert_eq!(config.undo_levels, 20);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults, EditorDefaults::default());
        assert_eq!(config.undo_levels, 100);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config.undo_levels, 100);
    }
}
