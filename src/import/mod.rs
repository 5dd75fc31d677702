pub mod dataset;
pub mod sanitize;

// Re-export commonly used items
pub use dataset::{RawDataset, RawEntry, RawStation};
pub use sanitize::{sanitize_stations, Axis, DropReason, DroppedRecord, Sanitized};
