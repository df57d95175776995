//! Hub ranking and aggregate tallies.
//!
//! Every function here is an independent reduction over an immutable
//! catalog or graph and returns its own table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::RoomCatalog;
use crate::graph::ConnectionGraph;
use crate::model::RoomId;

/// Label → occurrence count, labels in first-seen order.
pub type Histogram = IndexMap<String, usize>;

/// A room and its out-degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    pub room_id: RoomId,
    pub degree: usize,
}

/// Top `limit` rooms by out-degree, highest first. Ties keep catalog order.
pub fn rank_hubs(graph: &ConnectionGraph, limit: usize) -> Vec<Hub> {
    let mut hubs: Vec<Hub> = graph
        .rooms()
        .map(|id| Hub { room_id: id.clone(), degree: graph.out_degree(id.as_str()) })
        .collect();
    // sort_by is stable
    hubs.sort_by(|a, b| b.degree.cmp(&a.degree));
    hubs.truncate(limit);
    hubs
}

/// Out-degree of every room, in catalog order.
pub fn out_degrees(graph: &ConnectionGraph) -> IndexMap<RoomId, usize> {
    graph.rooms().map(|id| (id.clone(), graph.out_degree(id.as_str()))).collect()
}

pub fn tally_room_types(catalog: &RoomCatalog) -> Histogram {
    tally(catalog.rooms().map(|r| r.room_type.as_str()))
}

pub fn tally_regions(catalog: &RoomCatalog) -> Histogram {
    tally(catalog.rooms().map(|r| r.region.as_str()))
}

pub fn tally_locations(catalog: &RoomCatalog) -> Histogram {
    tally(catalog.rooms().map(|r| r.location.as_str()))
}

/// Counts every raw exit, duplicates included.
pub fn tally_directions(catalog: &RoomCatalog) -> Histogram {
    tally(
        catalog
            .iter_exits()
            .flat_map(|(_, exits)| exits.iter().map(|e| e.direction.as_str())),
    )
}

/// Rooms whose exit list is empty.
pub fn rooms_without_exits(catalog: &RoomCatalog) -> Vec<RoomId> {
    rooms_with_exit_count(catalog, 0)
}

/// Rooms with exactly one raw exit.
pub fn single_exit_rooms(catalog: &RoomCatalog) -> Vec<RoomId> {
    rooms_with_exit_count(catalog, 1)
}

fn rooms_with_exit_count(catalog: &RoomCatalog, count: usize) -> Vec<RoomId> {
    catalog
        .iter_exits()
        .filter(|(_, exits)| exits.len() == count)
        .map(|(id, _)| id.clone())
        .collect()
}

fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Histogram {
    let mut counts = Histogram::new();
    for label in labels {
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Histogram entries by count, highest first. Ties keep first-seen order.
pub fn sorted_by_count(histogram: &Histogram) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = histogram.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Exit, Room};

    fn catalog() -> RoomCatalog {
        RoomCatalog::from_rooms([
            (
                Room::new("gate").with_type("street").with_region("North", "Gate"),
                vec![Exit::new("north", "square"), Exit::new("south", "road")],
            ),
            (
                Room::new("square").with_type("plaza").with_region("North", "Square"),
                vec![Exit::new("south", "gate"), Exit::new("east", "inn"), Exit::new("west", "shop")],
            ),
            (Room::new("inn").with_type("shop").with_region("East", "Inn"), vec![Exit::new("west", "square")]),
            (Room::new("shop").with_type("shop").with_region("West", "Shop"), vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_hub_ranking() {
        let g = ConnectionGraph::from_catalog(&catalog());
        let hubs = rank_hubs(&g, 2);

        assert_eq!(hubs.len(), 2);
        assert_eq!(hubs[0], Hub { room_id: "square".into(), degree: 3 });
        assert_eq!(hubs[1], Hub { room_id: "gate".into(), degree: 2 });
    }

    #[test]
    fn test_hub_ties_keep_catalog_order() {
        let c = RoomCatalog::from_rooms([
            (Room::new("x"), vec![Exit::new("n", "y")]),
            (Room::new("y"), vec![Exit::new("s", "x")]),
            (Room::new("z"), vec![]),
        ])
        .unwrap();
        let hubs = rank_hubs(&ConnectionGraph::from_catalog(&c), 10);

        let order: Vec<&str> = hubs.iter().map(|h| h.room_id.as_str()).collect();
        assert_eq!(order, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_tallies() {
        let c = catalog();

        let types = tally_room_types(&c);
        assert_eq!(types["shop"], 2);
        assert_eq!(types["street"], 1);

        let regions = tally_regions(&c);
        assert_eq!(regions["North"], 2);
        assert_eq!(regions.len(), 3);
        assert_eq!(tally_locations(&c).len(), 4);

        let dirs = tally_directions(&c);
        assert_eq!(dirs["south"], 2);
        assert_eq!(dirs["west"], 2);
        assert_eq!(dirs.values().sum::<usize>(), 6);
    }

    #[test]
    fn test_exit_count_buckets() {
        let c = catalog();
        assert_eq!(rooms_without_exits(&c), vec![RoomId::from("shop")]);
        assert_eq!(single_exit_rooms(&c), vec![RoomId::from("inn")]);
    }

    #[test]
    fn test_sorted_by_count_is_stable() {
        let mut h = Histogram::new();
        h.insert("b".into(), 1);
        h.insert("a".into(), 3);
        h.insert("c".into(), 1);
        assert_eq!(sorted_by_count(&h), vec![("a", 3), ("b", 1), ("c", 1)]);
    }
}
