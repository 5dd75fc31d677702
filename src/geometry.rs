use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PADDING, MAX_PRECISION};
use crate::error::LayoutError;
use crate::models::Station;

/// Space reserved around the drawable area of the canvas.
///
/// Sides missing from a serialized value take their [`DEFAULT_PADDING`] value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        DEFAULT_PADDING
    }
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned geographic extent of a dataset, already expanded by the margin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRegion {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingRegion {
    /// Compute the extent of `stations`, pushed outward by `margin` on every side.
    ///
    /// A single station yields a region of exactly `2 * margin` in each axis.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::EmptyDataset` if there are no stations and
    /// `LayoutError::InvalidSetting` if the margin is negative or not finite.
    pub fn from_stations(stations: &[Station], margin: f64) -> Result<Self, LayoutError> {
        Self::from_points(stations.iter().map(|s| (s.lon, s.lat)), margin)
    }

    /// Same as [`Self::from_stations`] over raw `(lon, lat)` pairs.
    ///
    /// # Errors
    ///
    /// See [`Self::from_stations`].
    pub fn from_points<I>(points: I, margin: f64) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        if !margin.is_finite() || margin < 0.0 {
            return Err(LayoutError::InvalidSetting {
                name: "margin",
                value: margin,
            });
        }

        let mut min_lon = f64::MAX;
        let mut max_lon = f64::MIN;
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut seen = false;

        for (lon, lat) in points {
            seen = true;
            min_lon = min_lon.min(lon);
            max_lon = max_lon.max(lon);
            min_lat = min_lat.min(lat);
            max_lat = max_lat.max(lat);
        }

        if !seen {
            return Err(LayoutError::EmptyDataset);
        }

        Ok(Self {
            min_lon: min_lon - margin,
            max_lon: max_lon + margin,
            min_lat: min_lat - margin,
            max_lat: max_lat + margin,
        })
    }

    #[must_use]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// Linear, aspect-preserving mapping from geographic coordinates to canvas pixels.
///
/// Built once per dataset and canvas size; rebuild it on resize instead of
/// mutating it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    min_lon: f64,
    max_lat: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    rounding: f64,
}

impl Projector {
    /// Fit `bounds` into the canvas minus `padding`, centered on the axis with slack.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidSetting` when `precision` exceeds
    /// [`MAX_PRECISION`], `LayoutError::NonPositiveDrawableArea` when the padding
    /// consumes the canvas and `LayoutError::DegenerateScale` when the fitted scale
    /// is zero, negative or not finite.
    pub fn new(
        bounds: &BoundingRegion,
        canvas: CanvasSize,
        padding: Padding,
        precision: u32,
    ) -> Result<Self, LayoutError> {
        if precision > MAX_PRECISION {
            return Err(LayoutError::InvalidSetting {
                name: "precision",
                value: f64::from(precision),
            });
        }

        let map_width = canvas.width - padding.left - padding.right;
        let map_height = canvas.height - padding.top - padding.bottom;

        if !(map_width > 0.0 && map_height > 0.0) {
            return Err(LayoutError::NonPositiveDrawableArea {
                width: map_width,
                height: map_height,
            });
        }

        let lon_span = bounds.lon_span();
        let lat_span = bounds.lat_span();
        let scale = (map_width / lon_span).min(map_height / lat_span);

        if !scale.is_finite() || scale <= 0.0 {
            return Err(LayoutError::DegenerateScale { scale });
        }

        #[allow(clippy::cast_possible_wrap)]
        let rounding = 10f64.powi(precision as i32);

        Ok(Self {
            min_lon: bounds.min_lon,
            max_lat: bounds.max_lat,
            scale,
            offset_x: padding.left + (map_width - lon_span * scale) / 2.0,
            offset_y: padding.top + (map_height - lat_span * scale) / 2.0,
            rounding,
        })
    }

    #[must_use]
    pub fn project(&self, lon: f64, lat: f64) -> CanvasPoint {
        let x = self.offset_x + (lon - self.min_lon) * self.scale;
        // Latitude grows upward, canvas Y grows downward
        let y = self.offset_y + (self.max_lat - lat) * self.scale;
        CanvasPoint {
            x: self.round(x),
            y: self.round(y),
        }
    }

    #[must_use]
    pub fn project_station(&self, station: &Station) -> CanvasPoint {
        self.project(station.lon, station.lat)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn round(&self, value: f64) -> f64 {
        (value * self.rounding).round() / self.rounding
    }
}
