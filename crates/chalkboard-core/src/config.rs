//! Tunable canvas settings.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Settings for a [`Canvas`](crate::Canvas) session.
///
/// Every field has a default, so a config file only needs to list the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in device pixels (zoom pivots on its center).
    pub canvas_width: f64,
    /// Canvas height in device pixels.
    pub canvas_height: f64,
    /// Lower zoom bound.
    pub min_scale: f64,
    /// Upper zoom bound.
    pub max_scale: f64,
    /// Zoom increment used by zoom in/out buttons.
    pub zoom_step: f64,
    /// Text font size in logical pixels.
    pub font_size: f64,
    /// Fixed height of a text box.
    pub line_height: f64,
    /// Approximate glyph advance as a fraction of the font size.
    pub glyph_advance: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1280.0,
            canvas_height: 720.0,
            min_scale: 0.1,
            max_scale: 3.0,
            zoom_step: 0.2,
            font_size: 24.0,
            line_height: 20.0,
            glyph_advance: 0.5,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that the values describe a usable canvas.
    ///
    /// Zoom bounds must satisfy `0 < min_scale <= max_scale`; sizes and
    /// steps must be finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("zoom_step", self.zoom_step),
            ("font_size", self.font_size),
            ("line_height", self.line_height),
            ("glyph_advance", self.glyph_advance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Invalid(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CanvasConfig::default();
        assert!((config.zoom_step - 0.2).abs() < f64::EPSILON);
        assert!((config.min_scale - 0.1).abs() < f64::EPSILON);
        assert!((config.max_scale - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CanvasConfig::from_json(r#"{ "canvas_width": 800.0 }"#).unwrap();
        assert!((config.canvas_width - 800.0).abs() < f64::EPSILON);
        assert!((config.canvas_height - 720.0).abs() < f64::EPSILON);
        assert!((config.line_height - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            CanvasConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(CanvasConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_zoom_bounds_rejected() {
        let result = CanvasConfig::from_json(r#"{ "min_scale": 5.0, "max_scale": 1.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_positive_values_rejected() {
        for json in [
            r#"{ "min_scale": 0.0 }"#,
            r#"{ "canvas_width": -10.0 }"#,
            r#"{ "zoom_step": 0.0 }"#,
        ] {
            assert!(
                matches!(CanvasConfig::from_json(json), Err(ConfigError::Invalid(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_equal_zoom_bounds_allowed() {
        let config = CanvasConfig::from_json(r#"{ "min_scale": 1.0, "max_scale": 1.0 }"#).unwrap();
        assert!((config.min_scale - config.max_scale).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "min_scale": 4.0 }}"#).unwrap();
        assert!(matches!(CanvasConfig::load(file.path()), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "zoom_step": 0.5, "font_size": 18.0 }}"#).unwrap();

        let config = CanvasConfig::load(file.path()).unwrap();
        assert!((config.zoom_step - 0.5).abs() < f64::EPSILON);
        assert!((config.font_size - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CanvasConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
