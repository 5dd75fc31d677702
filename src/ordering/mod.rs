//! Grouping stations by route and putting each route into driving order

mod policy;
mod registry;

pub use policy::{AxisSort, OrderingPolicy, SpliceCorrection};
pub use registry::PolicyRegistry;

use indexmap::IndexMap;
use log::warn;
use serde::Serialize;
use std::fmt;

use crate::models::Station;

/// Stations per route id, routes in order of first appearance
pub type RouteGroups = IndexMap<String, Vec<Station>>;

/// A station name referenced by (or missing from) an ordering table.
///
/// Ordering falls back instead of failing; these records make the fallback
/// visible for data-quality checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum UnresolvedReference {
    /// Station not in the route's explicit sequence, placed after the listed ones
    UnlistedStation { route_id: String, name: String },
    /// Splice anchor not found, section appended at the end
    MissingAnchor { route_id: String, anchor: String },
    /// Section name with no matching station on the route
    MissingSectionStation { route_id: String, name: String },
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnlistedStation { route_id, name } => {
                write!(f, "route {route_id}: station {name} is not in the ordering table")
            }
            Self::MissingAnchor { route_id, anchor } => {
                write!(f, "route {route_id}: splice anchor {anchor} not found, section appended")
            }
            Self::MissingSectionStation { route_id, name } => {
                write!(f, "route {route_id}: section station {name} not found")
            }
        }
    }
}

/// Split stations by route id, keeping input order inside each route
#[must_use]
pub fn group_by_route(stations: &[Station]) -> RouteGroups {
    let mut groups = RouteGroups::new();
    for station in stations {
        groups
            .entry(station.route_id.clone())
            .or_default()
            .push(station.clone());
    }
    groups
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ordered {
    pub routes: RouteGroups,
    pub unresolved: Vec<UnresolvedReference>,
}

impl Ordered {
    /// All stations, route after route
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.routes.values().flatten()
    }
}

/// Apply each route's policy from `registry`; unregistered routes are left as they are
#[must_use]
pub fn order_routes(groups: RouteGroups, registry: &PolicyRegistry) -> Ordered {
    let mut unresolved = Vec::new();
    let mut routes = RouteGroups::with_capacity(groups.len());

    for (route_id, mut stations) in groups {
        if let Some(policy) = registry.policy_for(&route_id) {
            let misses = policy.apply(&route_id, &mut stations);
            for miss in &misses {
                warn!("{miss}");
            }
            unresolved.extend(misses);
        }
        routes.insert(route_id, stations);
    }

    Ordered { routes, unresolved }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(route_id: &str, name: &str, lon: f64, lat: f64) -> Station {
        Station {
            name: name.to_string(),
            code: name.to_string(),
            route_id: route_id.to_string(),
            route_name: String::new(),
            lon,
            lat,
        }
    }

    #[test]
    fn test_group_by_route_keeps_first_appearance_order() {
        let stations = vec![
            station("015", "서평택", 126.9, 36.9),
            station("001", "서울", 127.0, 37.4),
            station("015", "목포", 126.4, 34.8),
            station("001", "부산", 129.0, 35.2),
        ];
        let groups = group_by_route(&stations);

        let ids: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["015", "001"]);
        assert_eq!(groups["015"][0].name, "서평택");
        assert_eq!(groups["015"][1].name, "목포");
    }

    #[test]
    fn test_order_routes_applies_registered_policy_only() {
        let registry = PolicyRegistry::new()
            .with_policy("015", OrderingPolicy::GeographicSort(AxisSort::LatitudeDescending));
        let stations = vec![
            station("015", "목포", 126.4, 34.8),
            station("999", "b", 127.0, 36.0),
            station("015", "서평택", 126.9, 36.9),
            station("999", "a", 127.0, 38.0),
        ];
        let ordered = order_routes(group_by_route(&stations), &registry);

        let first: Vec<&str> = ordered.routes["015"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(first, vec!["서평택", "목포"]);
        let second: Vec<&str> = ordered.routes["999"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(second, vec!["b", "a"]);

        let flat: Vec<&str> = ordered.stations().map(|s| s.name.as_str()).collect();
        assert_eq!(flat, vec!["서평택", "목포", "b", "a"]);
        assert!(ordered.unresolved.is_empty());
    }

    #[test]
    fn test_order_routes_collects_unresolved() {
        let registry = PolicyRegistry::new()
            .with_policy("001", OrderingPolicy::ExplicitSequence(vec!["서울".into(), "부산".into()]));
        let stations = vec![
            station("001", "부산", 129.0, 35.2),
            station("001", "신설", 128.0, 36.0),
            station("001", "서울", 127.0, 37.4),
        ];
        let ordered = order_routes(group_by_route(&stations), &registry);
        assert_eq!(
            ordered.unresolved,
            vec![UnresolvedReference::UnlistedStation {
                route_id: "001".into(),
                name: "신설".into(),
            }]
        );
    }

    #[test]
    fn test_order_routes_empty_input() {
        let ordered = order_routes(RouteGroups::new(), &PolicyRegistry::highways());
        assert!(ordered.routes.is_empty());
        assert!(ordered.unresolved.is_empty());
    }
}
