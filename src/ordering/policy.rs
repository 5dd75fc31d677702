use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use super::UnresolvedReference;
use crate::models::Station;

/// Coordinate axis (and direction) used by geographic ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSort {
    /// North to south
    LatitudeDescending,
    /// West to east
    LongitudeAscending,
}

impl AxisSort {
    fn compare(self, a: &Station, b: &Station) -> Ordering {
        match self {
            Self::LatitudeDescending => b.lat.total_cmp(&a.lat),
            Self::LongitudeAscending => a.lon.total_cmp(&b.lon),
        }
    }

    /// Stable sort, ties keep their input order
    pub fn sort(self, stations: &mut [Station]) {
        stations.sort_by(|a, b| self.compare(a, b));
    }
}

/// Fix-up for a stretch of road whose coordinates misstate the driving order.
///
/// After the geographic sort, the `section` stations are pulled out, put in
/// the order listed in `section`, and reinserted right before `anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpliceCorrection {
    pub sort: AxisSort,
    pub section: Vec<String>,
    pub anchor: String,
}

/// How one route's stations are put into driving order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderingPolicy {
    /// Surveyed list of station names; unlisted stations go last
    ExplicitSequence(Vec<String>),
    GeographicSort(AxisSort),
    SpliceCorrection(SpliceCorrection),
}

impl OrderingPolicy {
    /// Reorder `stations` in place, returning every name reference that could not be resolved
    pub fn apply(&self, route_id: &str, stations: &mut Vec<Station>) -> Vec<UnresolvedReference> {
        match self {
            Self::ExplicitSequence(sequence) => order_by_sequence(route_id, sequence, stations),
            Self::GeographicSort(axis) => {
                axis.sort(stations);
                Vec::new()
            }
            Self::SpliceCorrection(correction) => splice_section(route_id, correction, stations),
        }
    }
}

fn rank_table(names: &[String]) -> HashMap<&str, usize> {
    let mut ranks = HashMap::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        // First listing wins if a name is repeated
        ranks.entry(name.as_str()).or_insert(i);
    }
    ranks
}

fn order_by_sequence(
    route_id: &str,
    sequence: &[String],
    stations: &mut [Station],
) -> Vec<UnresolvedReference> {
    let ranks = rank_table(sequence);

    let unresolved = stations
        .iter()
        .filter(|s| !ranks.contains_key(s.name.as_str()))
        .map(|s| UnresolvedReference::UnlistedStation {
            route_id: route_id.to_string(),
            name: s.name.clone(),
        })
        .collect();

    stations.sort_by_key(|s| ranks.get(s.name.as_str()).copied().unwrap_or(usize::MAX));

    unresolved
}

fn splice_section(
    route_id: &str,
    correction: &SpliceCorrection,
    stations: &mut Vec<Station>,
) -> Vec<UnresolvedReference> {
    correction.sort.sort(stations);

    let ranks = rank_table(&correction.section);
    let (mut section, mut rest): (Vec<Station>, Vec<Station>) = std::mem::take(stations)
        .into_iter()
        .partition(|s| ranks.contains_key(s.name.as_str()));

    section.sort_by_key(|s| ranks[s.name.as_str()]);

    let mut unresolved: Vec<UnresolvedReference> = correction
        .section
        .iter()
        .filter(|name| !section.iter().any(|s| &s.name == *name))
        .map(|name| UnresolvedReference::MissingSectionStation {
            route_id: route_id.to_string(),
            name: name.clone(),
        })
        .collect();

    let insert_at = if let Some(i) = rest.iter().position(|s| s.name == correction.anchor) {
        i
    } else {
        unresolved.push(UnresolvedReference::MissingAnchor {
            route_id: route_id.to_string(),
            anchor: correction.anchor.clone(),
        });
        rest.len()
    };

    let tail = rest.split_off(insert_at);
    rest.extend(section);
    rest.extend(tail);
    *stations = rest;

    unresolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, lon: f64, lat: f64) -> Station {
        Station {
            name: name.to_string(),
            code: name.to_string(),
            route_id: "010".to_string(),
            route_name: "남해선A".to_string(),
            lon,
            lat,
        }
    }

    fn names(stations: &[Station]) -> Vec<&str> {
        stations.iter().map(|s| s.name.as_str()).collect()
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_explicit_sequence_puts_unlisted_last_in_input_order() {
        let policy = OrderingPolicy::ExplicitSequence(strings(&["서울", "수원신갈", "기흥", "오산"]));
        let mut stations = vec![
            station("x1", 0.0, 0.0),
            station("오산", 0.0, 0.0),
            station("서울", 0.0, 0.0),
            station("x2", 0.0, 0.0),
            station("기흥", 0.0, 0.0),
            station("수원신갈", 0.0, 0.0),
            station("x3", 0.0, 0.0),
        ];
        let unresolved = policy.apply("001", &mut stations);

        assert_eq!(names(&stations), vec!["서울", "수원신갈", "기흥", "오산", "x1", "x2", "x3"]);
        assert_eq!(unresolved.len(), 3);
        assert!(unresolved.iter().all(|u| matches!(u, UnresolvedReference::UnlistedStation { .. })));
    }

    #[test]
    fn test_explicit_sequence_tolerates_absent_names() {
        let policy = OrderingPolicy::ExplicitSequence(strings(&["a", "b", "c", "d"]));
        let mut stations = vec![station("d", 0.0, 0.0), station("b", 0.0, 0.0)];
        let unresolved = policy.apply("001", &mut stations);
        assert_eq!(names(&stations), vec!["b", "d"]);
        assert!(unresolved.is_empty());
    }

    #[test]
    fn test_latitude_descending_sort() {
        let policy = OrderingPolicy::GeographicSort(AxisSort::LatitudeDescending);
        let mut stations = vec![
            station("mid", 126.8, 36.5),
            station("south", 126.5, 35.0),
            station("north", 126.9, 37.4),
            station("mid2", 126.7, 36.5),
        ];
        policy.apply("015", &mut stations);
        assert_eq!(names(&stations), vec!["north", "mid", "mid2", "south"]);
        assert!(stations.windows(2).all(|w| w[0].lat >= w[1].lat));
    }

    #[test]
    fn test_longitude_ascending_sort() {
        let policy = OrderingPolicy::GeographicSort(AxisSort::LongitudeAscending);
        let mut stations = vec![station("e", 129.0, 35.2), station("w", 126.9, 35.0)];
        policy.apply("010", &mut stations);
        assert_eq!(names(&stations), vec!["w", "e"]);
    }

    fn namhae_correction() -> OrderingPolicy {
        OrderingPolicy::SpliceCorrection(SpliceCorrection {
            sort: AxisSort::LongitudeAscending,
            section: strings(&["남순천", "순천만", "서순천", "순천"]),
            anchor: "광양".to_string(),
        })
    }

    #[test]
    fn test_splice_reinserts_section_before_anchor() {
        let mut stations = vec![
            station("광양", 127.70, 34.98),
            station("순천", 127.52, 34.96),
            station("보성", 127.10, 34.80),
            station("서순천", 127.45, 34.97),
            station("진주", 128.10, 35.18),
            station("남순천", 127.55, 34.92),
            station("순천만", 127.50, 34.90),
        ];
        let unresolved = namhae_correction().apply("010", &mut stations);

        assert_eq!(
            names(&stations),
            vec!["보성", "남순천", "순천만", "서순천", "순천", "광양", "진주"]
        );
        assert!(unresolved.is_empty());
    }

    #[test]
    fn test_splice_without_anchor_appends_section() {
        let mut stations = vec![
            station("순천", 127.52, 34.96),
            station("보성", 127.10, 34.80),
            station("남순천", 127.55, 34.92),
            station("진주", 128.10, 35.18),
        ];
        let unresolved = namhae_correction().apply("010", &mut stations);

        assert_eq!(names(&stations), vec!["보성", "진주", "남순천", "순천"]);
        assert!(unresolved.contains(&UnresolvedReference::MissingAnchor {
            route_id: "010".to_string(),
            anchor: "광양".to_string(),
        }));
        assert!(unresolved.contains(&UnresolvedReference::MissingSectionStation {
            route_id: "010".to_string(),
            name: "순천만".to_string(),
        }));
    }

    #[test]
    fn test_policies_accept_empty_groups() {
        let mut stations = Vec::new();
        // Four section names plus the anchor are reported
        assert_eq!(namhae_correction().apply("010", &mut stations).len(), 5);
        assert!(stations.is_empty());

        let policy = OrderingPolicy::ExplicitSequence(strings(&["a"]));
        assert!(policy.apply("001", &mut stations).is_empty());
        assert!(stations.is_empty());
    }
}
