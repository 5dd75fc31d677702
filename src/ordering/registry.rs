use std::collections::HashMap;

use super::policy::{AxisSort, OrderingPolicy, SpliceCorrection};

/// Surveyed driving order of the Gyeongbu line (Seoul to Busan)
const GYEONGBU_SEQUENCE: &[&str] = &[
    "대왕판교", "판교", "서울", "수원신갈", "기흥", "기흥동탄", "오산", "남사진위", "안성",
    "북천안", "천안", "독립기념관", "청주", "남청주", "신탄진", "대전", "옥천", "금강", "영동",
    "황간", "추풍령", "김천", "동김천", "구미", "남구미", "왜관", "칠곡물류", "북대구", "경산",
    "영천", "서경주", "경주", "활천", "서울산", "통도사", "양산", "노포", "부산",
];

/// Surveyed driving order of the Yeongdong line (west to east)
const YEONGDONG_SEQUENCE: &[&str] = &[
    "군자", "서안산", "안산", "군포", "동군포", "부곡", "북수원", "동수원", "마성", "용인", "양지",
    "덕평", "이천", "여주", "문막", "원주", "새말", "둔내", "면온", "평창", "속사", "진부", "대관령",
];

/// Suncheon interchange cluster on the Namhae line, in driving order
const NAMHAE_SUNCHEON_SECTION: &[&str] = &["남순천", "순천만", "서순천", "순천"];
const NAMHAE_SUNCHEON_ANCHOR: &str = "광양";

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Ordering policy per route id.
///
/// Routes without an entry keep the order in which their stations arrived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyRegistry {
    policies: HashMap<String, OrderingPolicy>,
}

impl PolicyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Policies for the five national highways in the toll-station dataset
    #[must_use]
    pub fn highways() -> Self {
        Self::new()
            .with_policy("001", OrderingPolicy::ExplicitSequence(owned(GYEONGBU_SEQUENCE)))
            .with_policy("050", OrderingPolicy::ExplicitSequence(owned(YEONGDONG_SEQUENCE)))
            .with_policy("015", OrderingPolicy::GeographicSort(AxisSort::LatitudeDescending))
            .with_policy("035", OrderingPolicy::GeographicSort(AxisSort::LatitudeDescending))
            .with_policy(
                "010",
                OrderingPolicy::SpliceCorrection(SpliceCorrection {
                    sort: AxisSort::LongitudeAscending,
                    section: owned(NAMHAE_SUNCHEON_SECTION),
                    anchor: NAMHAE_SUNCHEON_ANCHOR.to_string(),
                }),
            )
    }

    #[must_use]
    pub fn with_policy(mut self, route_id: &str, policy: OrderingPolicy) -> Self {
        self.policies.insert(route_id.to_string(), policy);
        self
    }

    #[must_use]
    pub fn policy_for(&self, route_id: &str) -> Option<&OrderingPolicy> {
        self.policies.get(route_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highway_policies() {
        let registry = PolicyRegistry::highways();

        match registry.policy_for("001") {
            Some(OrderingPolicy::ExplicitSequence(names)) => {
                assert_eq!(names.len(), 38);
                assert_eq!(names.first().map(String::as_str), Some("대왕판교"));
                assert_eq!(names.last().map(String::as_str), Some("부산"));
            }
            other => panic!("unexpected policy for 001: {other:?}"),
        }

        assert!(matches!(
            registry.policy_for("050"),
            Some(OrderingPolicy::ExplicitSequence(names)) if names.len() == 23
        ));
        assert_eq!(
            registry.policy_for("015"),
            Some(&OrderingPolicy::GeographicSort(AxisSort::LatitudeDescending))
        );
        assert!(matches!(
            registry.policy_for("010"),
            Some(OrderingPolicy::SpliceCorrection(c)) if c.anchor == "광양" && c.section.len() == 4
        ));
        assert_eq!(registry.policy_for("999"), None);
    }
}
