// src/config.rs
use std::fs;
use std::io;
use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounce::BounceAnimationRequest;

pub const DEFAULT_CONFIG_PATH: &str = "assets/bounce.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Playback settings and the values the form starts with.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceConfig {
    /// Frame rate used to turn request frames into clip seconds.
    pub frames_per_second: f32,
    pub ball_radius: f32,
    pub defaults: BounceAnimationRequest,
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 24.0,
            ball_radius: 0.5,
            defaults: BounceAnimationRequest::default(),
        }
    }
}

impl BounceConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: BounceConfig = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    /// Reads `path`, falling back to the built-in defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_toml(&fs::read_to_string(path)?)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if !(self.frames_per_second.is_finite() && self.frames_per_second > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "frames_per_second must be positive, got {}",
                self.frames_per_second
            )));
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ball_radius must be positive, got {}",
                self.ball_radius
            )));
        }
        // Defaults only have to be well-formed; whether they fit the span is
        // the generator's call.
        self.defaults
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("defaults: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = BounceConfig::from_toml(
            r#"
            frames_per_second = 30.0
            [defaults]
            num_bounces = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.frames_per_second, 30.0);
        assert_eq!(config.ball_radius, 0.5);
        assert_eq!(config.defaults.num_bounces, 5);
        assert_eq!(config.defaults.start_height, 10.0);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = toml::to_string(&BounceConfig::default()).unwrap();
        assert_eq!(BounceConfig::from_toml(&text).unwrap(), BounceConfig::default());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            BounceConfig::from_toml("frames_per_second = [1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            BounceConfig::from_toml("frames_per_second = 0.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BounceConfig::from_toml("[defaults]\nstart_frame = 50\nend_frame = 10"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = BounceConfig::load_or_default(dir.path().join("bounce.toml")).unwrap();
        assert_eq!(config, BounceConfig::default());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ball_radius = 1.5").unwrap();
        let config = BounceConfig::load_or_default(file.path()).unwrap();
        assert_eq!(config.ball_radius, 1.5);
    }
}
