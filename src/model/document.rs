//! Raw world document shape: districts → locations → rooms → exits.
//!
//! Only `rooms[].id` and `exits[].targetRoomId` are required. Every other
//! field falls back to [`UNKNOWN`] (labels) or empty (text, coordinates), and
//! unrecognised keys are ignored. A `null` list reads as an empty one.

use serde::{Deserialize, Deserializer, Serialize};

use super::{Exit, Room, RoomId, UNKNOWN};

/// One world data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub districts: Vec<District>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct District {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rooms: Vec<RoomRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub room_type: Option<String>,
    #[serde(default)]
    pub coordinates: serde_json::Value,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exits: Vec<ExitRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitRecord {
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(rename = "targetRoomId")]
    pub target_room_id: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl WorldDocument {
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Flatten the hierarchy into normalized rooms with their exits, in
    /// document order.
    pub fn into_rooms(self) -> Vec<(Room, Vec<Exit>)> {
        let mut out = Vec::new();
        for district in self.districts {
            let region = label(district.name);
            for location in district.locations {
                let place = label(location.name);
                for record in location.rooms {
                    out.push(record.into_room(&region, &place));
                }
            }
        }
        out
    }

    pub fn room_count(&self) -> usize {
        self.districts
            .iter()
            .flat_map(|d| &d.locations)
            .map(|l| l.rooms.len())
            .sum()
    }
}

impl RoomRecord {
    fn into_room(self, region: &str, location: &str) -> (Room, Vec<Exit>) {
        let exits = self.exits.into_iter().map(ExitRecord::into_exit).collect();
        let room = Room {
            id: RoomId(self.id),
            name: label(self.name),
            room_type: label(self.room_type),
            region: region.to_string(),
            location: location.to_string(),
            coordinates: self.coordinates,
            description: self.description.unwrap_or_default(),
        };
        (room, exits)
    }
}

impl ExitRecord {
    fn into_exit(self) -> Exit {
        Exit {
            direction: label(self.direction),
            target: RoomId(self.target_room_id),
            description: self.description.unwrap_or_default(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn label(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}
