//! Room in the world graph.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder used for any descriptive field a room record leaves out.
pub const UNKNOWN: &str = "unknown";

/// Opaque room identifier, exactly as written in the world documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A room as recorded in the catalog.
///
/// Everything except `id` is carried for reporting only; the engine never
/// interprets `coordinates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub room_type: String,
    /// Top-level region (the document's district).
    pub region: String,
    /// Sub-location inside the region.
    pub location: String,
    pub coordinates: serde_json::Value,
    pub description: String,
}

impl Room {
    pub fn new(id: impl Into<RoomId>) -> Self {
        Self {
            id: id.into(),
            name: UNKNOWN.to_string(),
            room_type: UNKNOWN.to_string(),
            region: UNKNOWN.to_string(),
            location: UNKNOWN.to_string(),
            coordinates: serde_json::Value::Null,
            description: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>, location: impl Into<String>) -> Self {
        self.region = region.into();
        self.location = location.into();
        self
    }
}
