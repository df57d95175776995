//! Symmetry checker: dangling exits and exits with no way back.
//!
//! Any edge back counts as a return path. A `north` exit does not have to be
//! answered by `south`; that stricter rule lives in [`super::pairing`].

use serde::{Deserialize, Serialize};

use crate::graph::ConnectionGraph;
use crate::model::*;

/// Classification of a broken edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The target id is not a room in the catalog.
    MissingTarget,
    /// The target exists but has no edge back to the source.
    NoReverse,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingTarget => "missing_target",
            ViolationKind::NoReverse => "no_reverse",
        }
    }
}

/// One broken directed edge, with the first raw exit that forms it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub from: RoomId,
    pub to: RoomId,
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<ExitDetail>,
}

impl Violation {
    /// Direction of the offending exit, or `"unknown"` when none is attached.
    pub fn direction(&self) -> &str {
        self.exit.as_ref().map_or(UNKNOWN, |e| e.direction.as_str())
    }
}

/// Check every directed edge once, rooms in catalog order and targets in
/// first-seen order.
pub fn check_symmetry(graph: &ConnectionGraph) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (source, target) in graph.edges() {
        let kind = if !graph.contains(target.as_str()) {
            ViolationKind::MissingTarget
        } else if !graph.has_edge(target.as_str(), source.as_str()) {
            ViolationKind::NoReverse
        } else {
            continue;
        };

        violations.push(Violation {
            from: source.clone(),
            to: target.clone(),
            kind,
            exit: graph.edge_detail(source.as_str(), target.as_str()).first().cloned(),
        });
    }

    tracing::debug!(violations = violations.len(), "symmetry check finished");
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RoomCatalog;

    fn graph_of(rooms: Vec<(&str, Vec<Exit>)>) -> ConnectionGraph {
        let catalog = RoomCatalog::from_rooms(rooms.into_iter().map(|(id, exits)| (Room::new(id), exits))).unwrap();
        ConnectionGraph::from_catalog(&catalog)
    }

    #[test]
    fn test_symmetric_pair_is_clean() {
        let g = graph_of(vec![
            ("a", vec![Exit::new("east", "b")]),
            ("b", vec![Exit::new("west", "a")]),
        ]);
        assert!(check_symmetry(&g).is_empty());
    }

    #[test]
    fn test_any_reverse_direction_is_enough() {
        let g = graph_of(vec![
            ("a", vec![Exit::new("north", "b")]),
            ("b", vec![Exit::new("up", "a")]),
        ]);
        assert!(check_symmetry(&g).is_empty());
    }

    #[test]
    fn test_no_reverse_uses_first_exit_for_context() {
        let g = graph_of(vec![
            ("a", vec![Exit::new("north", "b").with_description("stairs"), Exit::new("up", "b")]),
            ("b", vec![]),
        ]);

        let v = check_symmetry(&g);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind, ViolationKind::NoReverse);
        assert_eq!(v[0].from.as_str(), "a");
        assert_eq!(v[0].to.as_str(), "b");
        assert_eq!(v[0].direction(), "north");
        assert_eq!(v[0].exit.as_ref().unwrap().description, "stairs");
    }

    #[test]
    fn test_missing_target() {
        let g = graph_of(vec![("d", vec![Exit::new("south", "z")])]);

        let v = check_symmetry(&g);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind, ViolationKind::MissingTarget);
        assert_eq!(v[0].to.as_str(), "z");
        assert_eq!(v[0].direction(), "south");
    }

    #[test]
    fn test_self_loop_is_its_own_reverse() {
        let g = graph_of(vec![("a", vec![Exit::new("around", "a")])]);
        assert!(check_symmetry(&g).is_empty());
    }

    #[test]
    fn test_kind_serializes_as_type_tag() {
        let v = Violation {
            from: "a".into(),
            to: "b".into(),
            kind: ViolationKind::NoReverse,
            exit: None,
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "no_reverse");
        assert!(json.get("exit").is_none());
        assert_eq!(ViolationKind::MissingTarget.as_str(), "missing_target");
    }
}
