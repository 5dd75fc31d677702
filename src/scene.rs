//! Drawing primitives for the route map
//!
//! The scene is plain data computed from the loaded map, a projector and the
//! current tab state. Whatever draws it (SVG, canvas, a test) only reads it.

use serde::Serialize;

use crate::constants::{
    ENDPOINT_RADIUS, GLOW_EXTRA_RADIUS, GRID_COLUMNS, GRID_ROWS, LABEL_OFFSET, STATION_RADIUS,
};
use crate::geometry::{CanvasPoint, CanvasSize, Projector};
use crate::models::{RouteCatalog, StatusSummary, ViewState};
use crate::pipeline::MapData;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLine {
    pub from: CanvasPoint,
    pub to: CanvasPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMarker {
    pub name: String,
    pub code: String,
    pub route_name: String,
    pub lon: f64,
    pub lat: f64,
    pub position: CanvasPoint,
    pub radius: f64,
    pub glow_radius: f64,
    pub is_endpoint: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub position: CanvasPoint,
}

/// One route's polyline with its markers and endpoint labels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePath {
    pub route_id: String,
    pub color: String,
    pub points: Vec<CanvasPoint>,
    pub markers: Vec<StationMarker>,
    pub labels: Vec<Label>,
}

impl RoutePath {
    /// Points in `"x,y x,y ..."` form
    #[must_use]
    pub fn points_attr(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub route_id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabEntry {
    pub route_id: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarEntry {
    pub route_id: String,
    pub name: String,
    pub color: String,
    pub station_count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub size: CanvasSize,
    pub grid: Vec<GridLine>,
    pub paths: Vec<RoutePath>,
    pub tabs: Vec<TabEntry>,
    pub legend: Vec<LegendEntry>,
    pub sidebar: Vec<SidebarEntry>,
    pub status: StatusSummary,
    pub active: Option<String>,
}

impl Scene {
    #[must_use]
    pub fn build(
        data: &MapData,
        projector: &Projector,
        view: &ViewState,
        catalog: &RouteCatalog,
        size: CanvasSize,
    ) -> Self {
        let paths = view
            .open_tabs
            .iter()
            .filter_map(|route_id| route_path(data, projector, catalog, route_id))
            .collect();

        let tabs = view
            .open_tabs
            .iter()
            .map(|route_id| TabEntry {
                route_id: route_id.clone(),
                label: catalog.name_of(route_id).to_string(),
                active: view.is_active(route_id),
            })
            .collect();

        let legend = view
            .open_tabs
            .iter()
            .filter_map(|route_id| {
                catalog.get(route_id).map(|meta| LegendEntry {
                    route_id: route_id.clone(),
                    name: meta.name.clone(),
                    color: meta.color.clone(),
                })
            })
            .collect();

        let sidebar = catalog
            .iter()
            .map(|(route_id, meta)| SidebarEntry {
                route_id: route_id.to_string(),
                name: meta.name.clone(),
                color: meta.color.clone(),
                station_count: data.route(route_id).map_or(0, <[_]>::len),
                active: view.is_active(route_id),
            })
            .collect();

        Self {
            size,
            grid: grid_lines(size),
            paths,
            tabs,
            legend,
            sidebar,
            status: view.status(&data.routes),
            active: view.active.clone(),
        }
    }

    #[must_use]
    pub fn path(&self, route_id: &str) -> Option<&RoutePath> {
        self.paths.iter().find(|p| p.route_id == route_id)
    }
}

fn route_path(
    data: &MapData,
    projector: &Projector,
    catalog: &RouteCatalog,
    route_id: &str,
) -> Option<RoutePath> {
    let stations = data.route(route_id).filter(|s| !s.is_empty())?;
    let last = stations.len() - 1;

    let mut points = Vec::with_capacity(stations.len());
    let mut markers = Vec::with_capacity(stations.len());
    let mut labels = Vec::new();

    for (i, station) in stations.iter().enumerate() {
        let position = projector.project_station(station);
        let is_endpoint = i == 0 || i == last;
        let radius = if is_endpoint { ENDPOINT_RADIUS } else { STATION_RADIUS };

        points.push(position);
        markers.push(StationMarker {
            name: station.name.clone(),
            code: station.code.clone(),
            route_name: station.route_name.clone(),
            lon: station.lon,
            lat: station.lat,
            position,
            radius,
            glow_radius: radius + GLOW_EXTRA_RADIUS,
            is_endpoint,
        });

        if is_endpoint {
            labels.push(Label {
                text: station.name.clone(),
                position: CanvasPoint {
                    x: position.x + LABEL_OFFSET.0,
                    y: position.y + LABEL_OFFSET.1,
                },
            });
        }
    }

    Some(RoutePath {
        route_id: route_id.to_string(),
        color: catalog.color_of(route_id).to_string(),
        points,
        markers,
        labels,
    })
}

fn grid_lines(size: CanvasSize) -> Vec<GridLine> {
    let columns = (1..GRID_COLUMNS).map(|i| {
        let x = size.width / f64::from(GRID_COLUMNS) * f64::from(i);
        GridLine {
            from: CanvasPoint { x, y: 0.0 },
            to: CanvasPoint { x, y: size.height },
        }
    });
    let rows = (1..GRID_ROWS).map(|j| {
        let y = size.height / f64::from(GRID_ROWS) * f64::from(j);
        GridLine {
            from: CanvasPoint { x: 0.0, y },
            to: CanvasPoint { x: size.width, y },
        }
    });
    columns.chain(rows).collect()
}
