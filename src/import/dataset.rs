//! Raw toll-station dataset as delivered by the upstream location API
//!
//! The API pages are merged into a single `{ "list": [...] }` envelope before
//! they reach this crate. Records are loosely typed: coordinates arrive as
//! strings most of the time, occasionally as numbers, and sometimes empty.
//! Identifier fields are just as loose, so every field is kept as a JSON value
//! and interpreted by the sanitizer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unvalidated station record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStation {
    pub unit_name: Option<Value>,
    pub unit_code: Option<Value>,
    pub route_no: Option<Value>,
    pub route_name: Option<Value>,
    /// Longitude
    pub x_value: Option<Value>,
    /// Latitude
    pub y_value: Option<Value>,
}

/// An entry of the `list` array: a record object, or anything else the feed put there
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Record(RawStation),
    Other(Value),
}

impl From<RawStation> for RawEntry {
    fn from(record: RawStation) -> Self {
        Self::Record(record)
    }
}

/// Envelope holding every record of one dataset load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDataset {
    #[serde(default)]
    pub list: Vec<RawEntry>,
}

impl RawDataset {
    /// Parse a dataset from its JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid JSON or the envelope has the
    /// wrong shape
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
