//! Exit (directed edge) out of a room.

use serde::{Deserialize, Serialize};

use super::RoomId;

/// A raw exit record, owned by exactly one source room.
///
/// Direction labels are free-form; duplicates within one room are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub direction: String,
    pub target: RoomId,
    pub description: String,
}

impl Exit {
    pub fn new(direction: impl Into<String>, target: impl Into<RoomId>) -> Self {
        Self {
            direction: direction.into(),
            target: target.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The parts of the exit kept on a graph edge for reporting.
    pub fn detail(&self) -> ExitDetail {
        ExitDetail {
            direction: self.direction.clone(),
            description: self.description.clone(),
        }
    }
}

/// Direction and description of one raw exit between a pair of rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitDetail {
    pub direction: String,
    pub description: String,
}
