// src/config/config_load.rs
//
// loading of config.toml

use nannou::prelude::*;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use super::config_types::{AnimationConfig, RenderConfig, StyleConfig, WindowConfig};
use crate::animation::StepTuning;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::exe_dir_path().filter(|path| path.exists()) {
            return Self::load_from(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from(PathBuf::from(CONFIG_FILE))
    }

    fn exe_dir_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        Some(exe_path.parent()?.join(CONFIG_FILE))
    }

    fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let anim = &self.animation;
        if anim.nodes == 0 || anim.ellipses == 0 || anim.parts == 0 {
            return Err(ConfigError::Invalid(
                "nodes, ellipses and parts must be at least 1".to_string(),
            ));
        }
        if !is_positive(anim.step_gap) {
            return Err(ConfigError::Invalid("step_gap must be positive".to_string()));
        }
        if anim.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be positive".to_string(),
            ));
        }

        let style = &self.style;
        if ![style.stroke_factor, style.size_factor, style.ellipse_factor]
            .into_iter()
            .all(is_positive)
        {
            return Err(ConfigError::Invalid(
                "style factors must be positive".to_string(),
            ));
        }
        if self.rendering.arc_resolution < 2 {
            return Err(ConfigError::Invalid(
                "arc_resolution must be at least 2".to_string(),
            ));
        }

        parse_hex_color(&style.fore_color)?;
        parse_hex_color(&style.back_color)?;
        Ok(())
    }

    pub fn fore_color(&self) -> Rgb {
        parse_hex_color(&self.style.fore_color).unwrap_or(rgb(0.957, 0.263, 0.212))
    }

    pub fn back_color(&self) -> Rgb {
        parse_hex_color(&self.style.back_color).unwrap_or(rgb(0.741, 0.741, 0.741))
    }

    pub fn step_tuning(&self) -> StepTuning {
        StepTuning {
            parts_a: self.animation.ellipses,
            parts_b: self.animation.parts,
            step_gap: self.animation.step_gap,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.animation.tick_interval_ms)
    }
}

// NaN and infinities fail too
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

pub fn parse_hex_color(value: &str) -> Result<Rgb, ConfigError> {
    let pattern = Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    let caps = pattern
        .captures(value.trim())
        .ok_or_else(|| ConfigError::InvalidColor(value.to_string()))?;

    let channel = |i: usize| -> Result<f32, ConfigError> {
        u8::from_str_radix(&caps[i], 16)
            .map(|c| c as f32 / 255.0)
            .map_err(|_| ConfigError::InvalidColor(value.to_string()))
    };
    Ok(rgb(channel(1)?, channel(2)?, channel(3)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.animation.nodes, 5);
        assert_eq!(config.animation.ellipses, 2);
        assert_eq!(config.animation.parts, 2);
        assert_eq!(config.animation.tick_interval_ms, 50);
        assert!((config.animation.step_gap - 0.05).abs() < f32::EPSILON);
        assert!(config.window.fullscreen);
        assert_eq!(config.style.fore_color, "#f44336");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::from_toml("[animation]\nnodes = 8\n").unwrap();
        assert_eq!(config.animation.nodes, 8);
        assert_eq!(config.animation.parts, 2);
        assert_eq!(config.rendering.arc_resolution, 64);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let cases = vec![
            "[animation]\nnodes = 0\n",
            "[animation]\nstep_gap = 0.0\n",
            "[animation]\nstep_gap = nan\n",
            "[animation]\nstep_gap = inf\n",
            "[style]\nstroke_factor = nan\n",
            "[style]\nsize_factor = inf\n",
            "[animation]\ntick_interval_ms = 0\n",
            "[style]\nstroke_factor = -1.0\n",
            "[rendering]\narc_resolution = 1\n",
        ];
        for case in cases {
            let result = Config::from_toml(case);
            assert!(
                matches!(result, Err(ConfigError::Invalid(_))),
                "Expected invalid config for {:?}",
                case
            );
        }
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let result = Config::from_toml("[style]\nfore_color = \"red\"\n");
        assert!(matches!(result, Err(ConfigError::InvalidColor(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = Config::from_toml("[animation\nnodes = 3");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#FF0080").unwrap();
        assert!((color.red - 1.0).abs() < 1e-6);
        assert!(color.green.abs() < 1e-6);
        assert!((color.blue - 128.0 / 255.0).abs() < 1e-6);

        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("123456").is_err());
    }

    #[test]
    fn test_step_tuning_follows_animation_section() {
        let config = Config::from_toml("[animation]\nellipses = 3\nparts = 4\n").unwrap();
        let tuning = config.step_tuning();
        assert_eq!(tuning.parts_a, 3);
        assert_eq!(tuning.parts_b, 4);
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
    }
}
