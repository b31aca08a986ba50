//! Host configuration (`config.json` in the platform config directory).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use galaxy_core::constants::TICK_RATE;
use galaxy_core::records::Records;
use galaxy_core::tuning::Tuning;
use galaxy_sim::SimConfig;

use crate::error::AppError;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where records live. Platform data directory when unset.
    pub data_dir: Option<PathBuf>,
    pub seed: u64,
    /// Game-loop ticks per second.
    pub tick_rate: u32,
    /// Player identity used for score submission.
    pub wallet: Option<String>,
    /// Append submissions to this JSON-lines file instead of logging them.
    pub score_log: Option<PathBuf>,
    pub tuning: Tuning,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed: 42,
            tick_rate: TICK_RATE,
            wallet: None,
            score_log: None,
            tuning: Tuning::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Load an explicit path (which must exist), or the default config file
    /// if there is one, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match config_dir().map(|dir| dir.join(CONFIG_FILE)) {
            Some(default) if default.exists() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Replace the gameplay tuning with a standalone tuning file. Keys the
    /// file leaves out take their default values.
    pub fn load_tuning(&mut self, path: &Path) -> Result<(), AppError> {
        self.tuning = Tuning::from_json(&fs::read_to_string(path)?)?;
        self.validate()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.tick_rate == 0 {
            return Err(AppError::Config("tick_rate must be positive".into()));
        }
        if self.tuning.width <= 0.0 || self.tuning.height <= 0.0 {
            return Err(AppError::Config("playfield size must be positive".into()));
        }
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(data_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn sim_config(&self, records: Records) -> SimConfig {
        SimConfig {
            seed: self.seed,
            tuning: self.tuning.clone(),
            records,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "cybergalaxy", "cyber-galaxy").map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "cybergalaxy", "cyber-galaxy").map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.tick_rate, 60);
        assert!(config.wallet.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "seed": 7, "tuning": { "start_lives": 5 } }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.tick_rate, TICK_RATE);
        assert_eq!(config.tuning.start_lives, 5);
        assert_eq!(config.tuning.max_lives, Tuning::default().max_lives);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let err = AppConfig::from_json(r#"{ "tick_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(AppConfig::from_json("{ seed: "), Err(AppError::Json(_))));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let path = std::env::temp_dir().join("galaxy_test_config_missing.json");
        let _ = fs::remove_file(&path);
        assert!(matches!(AppConfig::load_or_default(Some(&path)), Err(AppError::Io(_))));
    }

    #[test]
    fn test_tuning_file_overrides_tuning() {
        let path = std::env::temp_dir().join("galaxy_test_tuning_override.json");
        fs::write(&path, r#"{ "shield_hits": 2, "max_divers": 1 }"#).unwrap();
        let mut config = AppConfig::default();
        config.load_tuning(&path).unwrap();
        assert_eq!(config.tuning.shield_hits, 2);
        assert_eq!(config.tuning.max_divers, 1);
        assert_eq!(config.tuning.start_lives, Tuning::default().start_lives);

        fs::write(&path, r#"{ "width": 0.0 }"#).unwrap();
        assert!(matches!(config.load_tuning(&path), Err(AppError::Config(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/tmp/galaxy")),
            ..Default::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/galaxy"));
    }

    #[test]
    fn test_sim_config_carries_seed_and_records() {
        let config = AppConfig {
            seed: 9,
            ..Default::default()
        };
        let records = Records {
            best_score: 10,
            ..Default::default()
        };
        let sim = config.sim_config(records.clone());
        assert_eq!(sim.seed, 9);
        assert_eq!(sim.records, records);
    }
}
