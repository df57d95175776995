//! # Connection Graph
//!
//! Directed view of the catalog: one node per room, one edge per distinct
//! `(source, target)` pair. Several raw exits between the same pair collapse
//! into a single edge; their direction/description pairs are kept on the edge
//! for reporting.
//!
//! Targets keep the order in which they first appear in the source room's
//! exit list, so every traversal over the graph is deterministic.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::catalog::RoomCatalog;
use crate::model::*;

/// Raw exits backing one graph edge. Almost always exactly one.
pub type EdgeDetails = SmallVec<[ExitDetail; 1]>;

/// Adjacency for a single room: target → exits that lead there.
type Targets = IndexMap<RoomId, EdgeDetails>;

/// Read-only directed graph over room ids.
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraph {
    edges: IndexMap<RoomId, Targets>,
}

impl ConnectionGraph {
    /// Build from every room of the catalog, including rooms with no exits.
    pub fn from_catalog(catalog: &RoomCatalog) -> Self {
        Self::from_exits(catalog.iter_exits())
    }

    /// Build from an exit mapping. Single pass over all exits.
    pub fn from_exits<'a, I>(rooms: I) -> Self
    where
        I: IntoIterator<Item = (&'a RoomId, &'a [Exit])>,
    {
        let mut edges: IndexMap<RoomId, Targets> = IndexMap::new();
        for (room, exits) in rooms {
            let targets = edges.entry(room.clone()).or_default();
            for exit in exits {
                targets.entry(exit.target.clone()).or_default().push(exit.detail());
            }
        }
        let graph = Self { edges };
        tracing::debug!(rooms = graph.room_count(), edges = graph.edge_count(), "built connection graph");
        graph
    }

    /// Whether `id` is a node of the graph (a known room).
    pub fn contains(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    /// The stored key for `id`, borrowed from the graph.
    pub fn room_key(&self, id: &str) -> Option<&RoomId> {
        self.edges.get_key_value(id).map(|(key, _)| key)
    }

    /// Distinct targets of `id`, in first-seen order. Empty for rooms without
    /// exits and for unknown ids.
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a RoomId> + use<'a> {
        self.edges.get(id).into_iter().flat_map(|targets| targets.keys())
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges.get(source).is_some_and(|targets| targets.contains_key(target))
    }

    /// Every raw exit from `source` to `target`, in original order.
    pub fn edge_detail(&self, source: &str, target: &str) -> &[ExitDetail] {
        self.edges
            .get(source)
            .and_then(|targets| targets.get(target))
            .map(SmallVec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct targets.
    pub fn out_degree(&self, id: &str) -> usize {
        self.edges.get(id).map_or(0, IndexMap::len)
    }

    /// Room ids in catalog order.
    pub fn rooms(&self) -> impl Iterator<Item = &RoomId> {
        self.edges.keys()
    }

    pub fn room_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexMap::len).sum()
    }

    /// Every edge as `(source, target)`, rooms in catalog order and targets
    /// in first-seen order.
    pub fn edges(&self) -> impl Iterator<Item = (&RoomId, &RoomId)> {
        self.edges
            .iter()
            .flat_map(|(source, targets)| targets.keys().map(move |target| (source, target)))
    }

    /// Plain adjacency lists, suitable for serialization.
    pub fn adjacency(&self) -> IndexMap<RoomId, Vec<RoomId>> {
        self.edges
            .iter()
            .map(|(room, targets)| (room.clone(), targets.keys().cloned().collect()))
            .collect()
    }
}
