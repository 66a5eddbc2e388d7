//! Application configuration
//!
//! TOML file with full defaults; every field may be omitted.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use wayfinder_foundation::AppError;
use wayfinder_locate::FrameSize;

use crate::pipeline::{FeatureMode, PipelineOptions};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Feature page active at startup.
    pub feature: FeatureMode,
    /// Pause between recognition cycles, milliseconds.
    pub restart_delay_ms: u64,
    /// Classifier probability gate for counting a sighting.
    pub min_classification_probability: f32,
    /// Camera frame dimensions.
    pub frame: FrameConfig,
    /// Directory for rolling log files.
    pub log_dir: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feature: FeatureMode::Classify,
            restart_delay_ms: 1200,
            min_classification_probability: wayfinder_vision::MIN_CLASSIFICATION_PROBABILITY,
            frame: FrameConfig::default(),
            log_dir: "logs".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, or defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn frame_size(&self) -> FrameSize {
        FrameSize::new(self.frame.width, self.frame.height)
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            mode: self.feature,
            frame: self.frame_size(),
            min_classification_probability: self.min_classification_probability,
            restart_delay: Duration::from_millis(self.restart_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_collaborator_contract() {
        let config = AppConfig::default();
        assert_eq!(config.feature, FeatureMode::Classify);
        assert_eq!(config.restart_delay_ms, 1200);
        assert_eq!(config.frame.width, 640.0);
        assert_eq!(config.frame.height, 480.0);
    }

    #[test]
    fn load_without_path_uses_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.restart_delay_ms, 1200);
    }

    #[test]
    fn load_partial_toml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "feature = \"detect\"\nrestart_delay_ms = 300").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.feature, FeatureMode::Detect);
        assert_eq!(config.restart_delay_ms, 300);
        // Untouched fields keep their defaults.
        assert_eq!(config.frame.width, 640.0);
    }

    #[test]
    fn load_missing_file_is_a_config_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/wayfinder.toml"))).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
