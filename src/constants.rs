use crate::geometry::Padding;

/// Outward expansion applied to every side of the bounding region, in degrees
pub const DEFAULT_MARGIN: f64 = 0.18;

/// Decimal places kept on projected canvas coordinates
pub const DEFAULT_PRECISION: u32 = 2;

/// Largest precision accepted; beyond this `f64` rounding stops being exact
pub const MAX_PRECISION: u32 = 12;

/// Canvas padding used by the map view (top, right, bottom, left)
pub const DEFAULT_PADDING: Padding = Padding {
    top: 60.0,
    right: 80.0,
    bottom: 60.0,
    left: 80.0,
};

/// Color used for routes that have no catalog entry
pub const FALLBACK_ROUTE_COLOR: &str = "#ffffff";

/// Background grid divisions
pub const GRID_COLUMNS: u32 = 12;
pub const GRID_ROWS: u32 = 8;

/// Station marker radii
pub const ENDPOINT_RADIUS: f64 = 7.0;
pub const STATION_RADIUS: f64 = 4.5;
pub const GLOW_EXTRA_RADIUS: f64 = 4.0;

/// Endpoint label offset from the marker center
pub const LABEL_OFFSET: (f64, f64) = (10.0, 4.0);
