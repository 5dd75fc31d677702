use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MARGIN, DEFAULT_PADDING, DEFAULT_PRECISION, MAX_PRECISION};
use crate::error::LayoutError;
use crate::geometry::Padding;

/// Tunable layout constants.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial JSON object such as `{"margin": 0.25}` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    /// Degrees added on every side of the station extent
    #[serde(default = "default_margin")]
    pub margin: f64,
    /// Decimal places kept on projected coordinates
    #[serde(default = "default_precision")]
    pub precision: u32,
    #[serde(default = "default_padding")]
    pub padding: Padding,
}

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_padding() -> Padding {
    DEFAULT_PADDING
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            precision: DEFAULT_PRECISION,
            padding: DEFAULT_PADDING,
        }
    }
}

impl MapSettings {
    /// Parse settings from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid settings object
    pub fn from_json(content: &str) -> Result<Self, String> {
        let settings: Self =
            serde_json::from_str(content).map_err(|e| format!("Failed to parse settings: {e}"))?;
        settings.validate().map_err(|e| e.to_string())?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns `LayoutError::InvalidSetting` for a negative or non-finite margin
    /// or padding value, or a precision above [`MAX_PRECISION`].
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(LayoutError::InvalidSetting {
                name: "margin",
                value: self.margin,
            });
        }

        if self.precision > MAX_PRECISION {
            return Err(LayoutError::InvalidSetting {
                name: "precision",
                value: f64::from(self.precision),
            });
        }

        let sides = [
            ("padding.top", self.padding.top),
            ("padding.right", self.padding.right),
            ("padding.bottom", self.padding.bottom),
            ("padding.left", self.padding.left),
        ];
        for (name, value) in sides {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidSetting { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = MapSettings::from_json(r#"{"margin": 0.25}"#).expect("settings");
        assert!((settings.margin - 0.25).abs() < f64::EPSILON);
        assert_eq!(settings.precision, 2);
        assert_eq!(settings.padding, DEFAULT_PADDING);
    }

    #[test]
    fn test_empty_object_is_default() {
        let settings = MapSettings::from_json("{}").expect("settings");
        assert_eq!(settings, MapSettings::default());
    }

    #[test]
    fn test_negative_margin_is_rejected() {
        let result = MapSettings::from_json(r#"{"margin": -0.1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_padding_uses_default_sides() {
        let settings = MapSettings::from_json(r#"{"padding": {"top": 10}}"#).expect("settings");
        assert!((settings.padding.top - 10.0).abs() < f64::EPSILON);
        assert_eq!(settings.padding.left, DEFAULT_PADDING.left);
        assert_eq!(settings.padding.right, DEFAULT_PADDING.right);
        assert_eq!(settings.padding.bottom, DEFAULT_PADDING.bottom);
    }

    #[test]
    fn test_precision_above_cap_is_rejected() {
        let settings = MapSettings {
            precision: MAX_PRECISION + 1,
            ..MapSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(LayoutError::InvalidSetting { name: "precision", .. })
        ));
        assert!(MapSettings::from_json(r#"{"precision": 13}"#).is_err());
        assert!(MapSettings::from_json(r#"{"precision": 12}"#).is_ok());
    }

    #[test]
    fn test_negative_padding_is_rejected() {
        let settings = MapSettings {
            padding: Padding {
                top: -1.0,
                ..DEFAULT_PADDING
            },
            ..MapSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(LayoutError::InvalidSetting { name: "padding.top", .. })
        ));
    }
}
