//! Room dimension data structures and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a dimension value is rejected.
///
/// Dimension input is validated at the layout editor boundary; values that
/// pass are trusted everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DimensionError {
    /// The value was zero or negative.
    #[error("{field} must be a positive number of feet (got {value})")]
    NotPositive {
        /// Which dimension field was rejected.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The value was NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Which dimension field was rejected.
        field: &'static str,
    },
}

/// Physical room dimensions in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Room width in feet.
    pub width: f64,
    /// Room length in feet.
    pub length: f64,
    /// Ceiling height in feet.
    pub height: f64,
}

impl RoomDimensions {
    /// Creates dimensions from a width/length/height triple.
    #[must_use]
    pub const fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Validates that every dimension is a positive, finite number of feet.
    ///
    /// No upper bound is enforced; whether one exists is a business rule the
    /// product has not decided yet.
    pub fn validate(&self) -> Result<(), DimensionError> {
        for (field, value) in [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(DimensionError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(DimensionError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}

impl Default for RoomDimensions {
    /// The starter room: 12ft x 15ft with an 8ft ceiling.
    fn default() -> Self {
        Self::new(12.0, 15.0, 8.0)
    }
}

/// Formats a dimension value for display, dropping the fraction when whole
/// (e.g. `12.0` becomes `"12"`, `12.5` stays `"12.5"`).
#[must_use]
pub fn format_feet(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let dims = RoomDimensions::default();
        assert_eq!(dims.width, 12.0);
        assert_eq!(dims.length, 15.0);
        assert_eq!(dims.height, 8.0);
        assert!(dims.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let zero_width = RoomDimensions::new(0.0, 15.0, 8.0);
        assert_eq!(
            zero_width.validate(),
            Err(DimensionError::NotPositive {
                field: "width",
                value: 0.0
            })
        );

        let negative_height = RoomDimensions::new(12.0, 15.0, -1.0);
        assert!(negative_height.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let nan_length = RoomDimensions::new(12.0, f64::NAN, 8.0);
        assert_eq!(
            nan_length.validate(),
            Err(DimensionError::NotFinite { field: "length" })
        );

        let infinite_width = RoomDimensions::new(f64::INFINITY, 15.0, 8.0);
        assert!(infinite_width.validate().is_err());
    }

    #[test]
    fn test_format_feet() {
        assert_eq!(format_feet(12.0), "12");
        assert_eq!(format_feet(12.5), "12.5");
        assert_eq!(format_feet(0.25), "0.25");
    }
}
