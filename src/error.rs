use thiserror::Error;

/// Failures that stop a bounds or projector computation.
///
/// Malformed records and unresolved station names are not errors; they
/// are reported through [`crate::pipeline::Diagnostics`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("cannot compute bounds: the station list is empty")]
    EmptyDataset,

    #[error("padding leaves no drawable area ({width} x {height})")]
    NonPositiveDrawableArea { width: f64, height: f64 },

    #[error("projection scale {scale} is not usable")]
    DegenerateScale { scale: f64 },

    #[error("invalid setting {name}: {value}")]
    InvalidSetting { name: &'static str, value: f64 },
}
