//! Component finder: forward reachability and the island partition.
//!
//! Traversal is breadth-first along outgoing edges only, with one visited set
//! and an explicit queue. Edges to ids outside the catalog are dead ends.
//!
//! Components are forward-reachability classes rooted at seeds taken in
//! catalog order, not strongly connected components: `a → b` with no way
//! back still puts `b` in `a`'s component when `a` is the seed. One-way edges
//! are reported by the symmetry checker instead.

use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::graph::ConnectionGraph;
use crate::model::RoomId;

/// Rooms reachable from `start` (including itself), in visit order.
/// Empty if `start` is not a room.
pub fn reachable_from(graph: &ConnectionGraph, start: &str) -> Vec<RoomId> {
    let Some(seed) = graph.room_key(start) else {
        return Vec::new();
    };
    let mut visited = HashSet::new();
    walk(graph, seed, &mut visited)
}

/// Partition every room of the graph into components.
///
/// Each room lands in exactly one component. A traversal never re-enters a
/// room claimed by an earlier component, so later seeds only pick up what is
/// left. Components are ordered by their seed's catalog position.
pub fn connected_components(graph: &ConnectionGraph) -> Vec<Vec<RoomId>> {
    let mut visited: HashSet<&RoomId> = HashSet::with_capacity(graph.room_count());
    let mut components = Vec::new();

    for seed in graph.rooms() {
        if visited.contains(seed) {
            continue;
        }
        components.push(walk(graph, seed, &mut visited));
    }

    tracing::debug!(components = components.len(), "component partition finished");
    components
}

/// Rooms that cannot be reached from the first room of the catalog.
pub fn isolated_rooms(graph: &ConnectionGraph) -> Vec<RoomId> {
    let Some(first) = graph.rooms().next() else {
        return Vec::new();
    };
    let mut visited = HashSet::new();
    walk(graph, first, &mut visited);
    graph
        .rooms()
        .filter(|id| !visited.contains(id))
        .cloned()
        .collect()
}

fn walk<'g>(graph: &'g ConnectionGraph, seed: &'g RoomId, visited: &mut HashSet<&'g RoomId>) -> Vec<RoomId> {
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    if visited.insert(seed) {
        queue.push_back(seed);
    }

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());
        for next in graph.neighbors(current.as_str()) {
            if graph.contains(next.as_str()) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    order
}
