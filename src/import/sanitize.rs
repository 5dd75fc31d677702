use log::warn;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::dataset::{RawEntry, RawStation};
use crate::models::Station;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Longitude => write!(f, "longitude"),
            Self::Latitude => write!(f, "latitude"),
        }
    }
}

/// Why a record was left out of the station list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DropReason {
    /// Field absent, null or empty
    Missing { axis: Axis },
    /// Field present but not a number
    NotNumeric { axis: Axis, value: String },
    /// Parsed to NaN or infinity
    NotFinite { axis: Axis },
    /// Identifier field holding something other than text or a number
    InvalidField { field: &'static str, value: String },
    /// List entry that is not a record object
    NotARecord { value: String },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { axis } => write!(f, "missing {axis}"),
            Self::NotNumeric { axis, value } => write!(f, "non-numeric {axis} {value:?}"),
            Self::NotFinite { axis } => write!(f, "non-finite {axis}"),
            Self::InvalidField { field, value } => write!(f, "invalid {field} {value}"),
            Self::NotARecord { value } => write!(f, "not a record: {value}"),
        }
    }
}

/// A discarded record, kept for data-quality reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedRecord {
    /// Position of the record in the raw list
    pub index: usize,
    pub name: String,
    pub route_id: String,
    pub route_name: String,
    pub reason: DropReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sanitized {
    pub stations: Vec<Station>,
    pub dropped: Vec<DroppedRecord>,
}

/// Turn raw records into stations, dropping any record without a usable coordinate
/// or with a mistyped identifier.
///
/// Input order is preserved. Dropped records are logged and returned, never
/// treated as a failure of the batch.
#[must_use]
pub fn sanitize_stations(entries: &[RawEntry]) -> Sanitized {
    let mut result = Sanitized::default();

    for (index, entry) in entries.iter().enumerate() {
        let outcome = match entry {
            RawEntry::Record(record) => station_from_record(record).map_err(|reason| {
                (
                    display_text(record.unit_name.as_ref()),
                    display_text(record.route_no.as_ref()),
                    display_text(record.route_name.as_ref()),
                    reason,
                )
            }),
            RawEntry::Other(value) => Err((
                String::new(),
                String::new(),
                String::new(),
                DropReason::NotARecord {
                    value: value.to_string(),
                },
            )),
        };

        match outcome {
            Ok(station) => result.stations.push(station),
            Err((name, route_id, route_name, reason)) => {
                warn!("Dropping station record {index}: {name} ({route_name}): {reason}");
                result.dropped.push(DroppedRecord {
                    index,
                    name,
                    route_id,
                    route_name,
                    reason,
                });
            }
        }
    }

    result
}

fn station_from_record(record: &RawStation) -> Result<Station, DropReason> {
    let name = text_field(record.unit_name.as_ref(), "unitName")?;
    let code = text_field(record.unit_code.as_ref(), "unitCode")?;
    let route_id = text_field(record.route_no.as_ref(), "routeNo")?;
    let route_name = text_field(record.route_name.as_ref(), "routeName")?;
    let lon = parse_coordinate(record.x_value.as_ref(), Axis::Longitude)?;
    let lat = parse_coordinate(record.y_value.as_ref(), Axis::Latitude)?;

    Ok(Station {
        name,
        code: code.trim().to_string(),
        route_id,
        route_name,
        lon,
        lat,
    })
}

/// Identifiers may arrive as text or as bare numbers (`"unitCode": 140`)
fn text_field(value: Option<&Value>, field: &'static str) -> Result<String, DropReason> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(other) => Err(DropReason::InvalidField {
            field,
            value: other.to_string(),
        }),
    }
}

fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn parse_coordinate(value: Option<&Value>, axis: Axis) -> Result<f64, DropReason> {
    let parsed = match value {
        None | Some(Value::Null) => return Err(DropReason::Missing { axis }),
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(DropReason::Missing { axis });
            }
            text.parse::<f64>().map_err(|_| DropReason::NotNumeric {
                axis,
                value: text.to_string(),
            })?
        }
        Some(Value::Number(number)) => number.as_f64().ok_or_else(|| DropReason::NotNumeric {
            axis,
            value: number.to_string(),
        })?,
        Some(other) => {
            return Err(DropReason::NotNumeric {
                axis,
                value: other.to_string(),
            })
        }
    };

    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(DropReason::NotFinite { axis })
    }
}
