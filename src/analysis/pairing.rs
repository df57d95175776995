//! Strict direction pairing.
//!
//! Opt-in companion to the symmetry checker: an exit whose direction has a
//! well-known opposite must be answered by an exit in that opposite
//! direction leading back to the source room. Exits with free-form
//! directions (portals, named doors) are not checked.

use serde::{Deserialize, Serialize};

use crate::catalog::RoomCatalog;
use crate::model::RoomId;

const OPPOSITES: &[(&str, &str)] = &[
    ("north", "south"),
    ("east", "west"),
    ("northeast", "southwest"),
    ("northwest", "southeast"),
    ("up", "down"),
    ("in", "out"),
];

/// The inverse of a compass or vertical direction, case-insensitive.
pub fn opposite_direction(direction: &str) -> Option<&'static str> {
    OPPOSITES.iter().find_map(|&(a, b)| {
        if direction.eq_ignore_ascii_case(a) {
            Some(b)
        } else if direction.eq_ignore_ascii_case(b) {
            Some(a)
        } else {
            None
        }
    })
}

/// An exit whose target has no exit in the opposite direction back to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionMismatch {
    pub from: RoomId,
    pub to: RoomId,
    pub direction: String,
    pub expected: String,
}

/// Check every raw exit to a known room. Dangling exits are left to the
/// symmetry checker.
pub fn check_direction_pairing(catalog: &RoomCatalog) -> Vec<DirectionMismatch> {
    let mut mismatches = Vec::new();

    for (room, exits) in catalog.iter_exits() {
        for exit in exits {
            let Some(expected) = opposite_direction(&exit.direction) else {
                continue;
            };
            if !catalog.contains(exit.target.as_str()) {
                continue;
            }
            let answered = catalog
                .exits(exit.target.as_str())
                .iter()
                .any(|back| back.target == *room && back.direction.eq_ignore_ascii_case(expected));
            if !answered {
                mismatches.push(DirectionMismatch {
                    from: room.clone(),
                    to: exit.target.clone(),
                    direction: exit.direction.clone(),
                    expected: expected.to_string(),
                });
            }
        }
    }

    tracing::debug!(mismatches = mismatches.len(), "direction pairing check finished");
    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Exit, Room};

    #[test]
    fn test_opposites() {
        assert_eq!(opposite_direction("north"), Some("south"));
        assert_eq!(opposite_direction("South"), Some("north"));
        assert_eq!(opposite_direction("SOUTHWEST"), Some("northeast"));
        assert_eq!(opposite_direction("down"), Some("up"));
        assert_eq!(opposite_direction("portal"), None);
    }

    #[test]
    fn test_wrong_reverse_direction_is_flagged() {
        let c = RoomCatalog::from_rooms([
            (Room::new("a"), vec![Exit::new("north", "b")]),
            (Room::new("b"), vec![Exit::new("up", "a")]),
        ])
        .unwrap();

        let m = check_direction_pairing(&c);
        assert_eq!(m.len(), 2);
        assert_eq!(m[0].from.as_str(), "a");
        assert_eq!(m[0].expected, "south");
        assert_eq!(m[1].from.as_str(), "b");
        assert_eq!(m[1].expected, "down");
    }

    #[test]
    fn test_proper_pairs_and_free_form_exits_pass() {
        let c = RoomCatalog::from_rooms([
            (Room::new("a"), vec![Exit::new("east", "b"), Exit::new("portal", "b"), Exit::new("west", "gone")]),
            (Room::new("b"), vec![Exit::new("West", "a")]),
        ])
        .unwrap();

        assert!(check_direction_pairing(&c).is_empty());
    }
}
