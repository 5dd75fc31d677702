//! End-to-end layout: raw dataset to ordered routes, bounds and projector
//!
//! Every call starts from scratch and holds no state between calls, so it can
//! be rerun on each data reload or canvas resize.

use log::debug;
use serde::Serialize;

use crate::error::LayoutError;
use crate::geometry::{BoundingRegion, CanvasSize, Projector};
use crate::import::{sanitize_stations, DroppedRecord, RawDataset};
use crate::models::{MapSettings, Station};
use crate::ordering::{group_by_route, order_routes, PolicyRegistry, RouteGroups, UnresolvedReference};

/// Non-fatal findings from one load
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    pub dropped: Vec<DroppedRecord>,
    pub unresolved: Vec<UnresolvedReference>,
}

impl Diagnostics {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.unresolved.is_empty()
    }
}

/// Ordered stations and geographic extent of one dataset load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapData {
    pub routes: RouteGroups,
    pub bounds: BoundingRegion,
    pub diagnostics: Diagnostics,
    pub settings: MapSettings,
}

impl MapData {
    /// Sanitize, group, order and bound `dataset`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidSetting` for invalid settings and
    /// `LayoutError::EmptyDataset` when no record survives sanitizing.
    pub fn load(
        dataset: &RawDataset,
        registry: &PolicyRegistry,
        settings: &MapSettings,
    ) -> Result<Self, LayoutError> {
        settings.validate()?;

        let sanitized = sanitize_stations(&dataset.list);
        debug!(
            "Sanitized {} records: {} stations, {} dropped",
            dataset.len(),
            sanitized.stations.len(),
            sanitized.dropped.len()
        );

        let bounds = BoundingRegion::from_stations(&sanitized.stations, settings.margin)?;

        let ordered = order_routes(group_by_route(&sanitized.stations), registry);
        debug!("Ordered {} routes", ordered.routes.len());

        Ok(Self {
            routes: ordered.routes,
            bounds,
            diagnostics: Diagnostics {
                dropped: sanitized.dropped,
                unresolved: ordered.unresolved,
            },
            settings: *settings,
        })
    }

    /// Projector for a canvas of the given size, using the loaded settings
    ///
    /// # Errors
    ///
    /// See [`Projector::new`].
    pub fn projector(&self, canvas: CanvasSize) -> Result<Projector, LayoutError> {
        Projector::new(&self.bounds, canvas, self.settings.padding, self.settings.precision)
    }

    /// All stations, route after route, each route in driving order
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.routes.values().flatten()
    }

    #[must_use]
    pub fn route(&self, route_id: &str) -> Option<&[Station]> {
        self.routes.get(route_id).map(Vec::as_slice)
    }

    pub fn route_ids(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }
}
