#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

//! Highway toll-station map layout.
//!
//! Raw station records go through [`import::sanitize_stations`], are grouped
//! and put into driving order by [`ordering`], bounded by
//! [`geometry::BoundingRegion`] and placed on a canvas by
//! [`geometry::Projector`]. [`pipeline::MapData`] runs the whole chain and
//! [`scene::Scene`] turns the result into drawing primitives.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod import;
pub mod models;
pub mod ordering;
pub mod pipeline;
pub mod scene;

pub use error::LayoutError;
pub use geometry::{BoundingRegion, CanvasPoint, CanvasSize, Padding, Projector};
pub use import::RawDataset;
pub use models::{MapSettings, RouteCatalog, Station, ViewState};
pub use ordering::{OrderingPolicy, PolicyRegistry};
pub use pipeline::MapData;
pub use scene::Scene;
