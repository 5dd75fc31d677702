use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_ROUTE_COLOR;

/// Display metadata for a highway route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMeta {
    pub name: String,
    pub color: String,
}

/// Route metadata keyed by route id, in sidebar order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteCatalog {
    routes: IndexMap<String, RouteMeta>,
}

impl RouteCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The five national highways covered by the toll-station dataset
    #[must_use]
    pub fn highways() -> Self {
        [
            ("001", "경부선", "#e84040"),
            ("015", "서해안선", "#e87a40"),
            ("050", "영동선", "#3ab54a"),
            ("035", "중부선-대전통영선A", "#d4b800"),
            ("010", "남해선A", "#3a80e8"),
        ]
        .into_iter()
        .fold(Self::new(), |catalog, (id, name, color)| catalog.with_route(id, name, color))
    }

    #[must_use]
    pub fn with_route(mut self, id: &str, name: &str, color: &str) -> Self {
        self.routes.insert(
            id.to_string(),
            RouteMeta {
                name: name.to_string(),
                color: color.to_string(),
            },
        );
        self
    }

    #[must_use]
    pub fn get(&self, route_id: &str) -> Option<&RouteMeta> {
        self.routes.get(route_id)
    }

    /// Route color, falling back to white for routes without metadata
    #[must_use]
    pub fn color_of(&self, route_id: &str) -> &str {
        self.get(route_id).map_or(FALLBACK_ROUTE_COLOR, |meta| meta.color.as_str())
    }

    /// Route display name, falling back to the id itself
    #[must_use]
    pub fn name_of<'a>(&'a self, route_id: &'a str) -> &'a str {
        self.get(route_id).map_or(route_id, |meta| meta.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteMeta)> {
        self.routes.iter().map(|(id, meta)| (id.as_str(), meta))
    }
}
