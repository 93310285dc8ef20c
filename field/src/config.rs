//! Field configuration: viewport limits, bubble sizing and theme colors.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Hosts typically embed the JSON in the page and call
//! [`FieldConfig::from_json`] once at mount.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::color::parse_hex_rgb;

pub const DEFAULT_MAX_WIDTH: f64 = 1200.0;
pub const DEFAULT_MAX_HEIGHT: f64 = 850.0;
pub const DEFAULT_HEIGHT_RATIO: f64 = 0.8;
pub const DEFAULT_BUBBLE_RADIUS: f64 = 26.0;
pub const DEFAULT_BUBBLE_NAME_MAX_CHARS: usize = 14;

/// Error returned by [`FieldConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse field config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("theme color {field} is not #rgb or #rrggbb: {value}")]
    InvalidColor { field: &'static str, value: String },
}

/// Colors used to draw the diamond and the bubbles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTheme {
    pub grass: String,
    pub infield_dirt: String,
    pub chalk: String,
    pub base: String,
    pub mound: String,
    pub open_stroke: String,
    pub text: String,
    pub badge: String,
    pub selection: String,
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self {
            grass: "#2f7d32".into(),
            infield_dirt: "#b9855a".into(),
            chalk: "#ffffff".into(),
            base: "#f5f5f5".into(),
            mound: "#a8744a".into(),
            open_stroke: "#e0e0e0".into(),
            text: "#ffffff".into(),
            badge: "#d32f2f".into(),
            selection: "#ffd54f".into(),
        }
    }
}

/// Tunables for the depth-chart field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Upper bound on the drawn width in CSS pixels.
    pub max_width: f64,
    /// Upper bound on the drawn height in CSS pixels.
    pub max_height: f64,
    /// Height as a fraction of width before `max_height` applies.
    pub height_ratio: f64,
    /// Radius of a position bubble in CSS pixels.
    pub bubble_radius: f64,
    /// Longer player names are cut and end in `…` inside bubbles.
    pub bubble_name_max_chars: usize,
    pub theme: FieldTheme,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            height_ratio: DEFAULT_HEIGHT_RATIO,
            bubble_radius: DEFAULT_BUBBLE_RADIUS,
            bubble_name_max_chars: DEFAULT_BUBBLE_NAME_MAX_CHARS,
            theme: FieldTheme::default(),
        }
    }
}

impl FieldConfig {
    /// Parse and validate a JSON config. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// variants for out-of-range numbers or unparseable colors.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric limits and theme colors.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("max_width", self.max_width),
            ("max_height", self.max_height),
            ("height_ratio", self.height_ratio),
            ("bubble_radius", self.bubble_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let t = &self.theme;
        for (field, value) in [
            ("grass", &t.grass),
            ("infield_dirt", &t.infield_dirt),
            ("chalk", &t.chalk),
            ("base", &t.base),
            ("mound", &t.mound),
            ("open_stroke", &t.open_stroke),
            ("text", &t.text),
            ("badge", &t.badge),
            ("selection", &t.selection),
        ] {
            if parse_hex_rgb(value).is_none() {
                return Err(ConfigError::InvalidColor { field, value: value.clone() });
            }
        }
        Ok(())
    }
}
