use serde::Serialize;

/// A toll station with a validated coordinate.
///
/// Only produced by the sanitizer, so `lon` and `lat` are always finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub name: String,
    /// Trimmed unit code, unique within a route
    pub code: String,
    pub route_id: String,
    pub route_name: String,
    pub lon: f64,
    pub lat: f64,
}
