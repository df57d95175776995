//! # Connectivity Analysis
//!
//! Runs every pass over one catalog and its connection graph and assembles
//! the [`AnalysisResult`].
//!
//! ```text
//! RoomCatalog ─→ ConnectionGraph ─┬─→ symmetry    (missing_target / no_reverse)
//!                                 ├─→ components  (partition, isolated rooms)
//!                                 ├─→ ranking     (hubs, degrees, tallies)
//!                                 └─→ pairing     (opt-in direction check)
//! ```
//!
//! The passes share nothing but the read-only inputs. The same catalog always
//! produces the same result.

pub mod symmetry;
pub mod components;
pub mod ranking;
pub mod pairing;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::RoomCatalog;
use crate::config::AnalysisConfig;
use crate::graph::ConnectionGraph;
use crate::model::RoomId;

pub use symmetry::{Violation, ViolationKind, check_symmetry};
pub use components::{connected_components, isolated_rooms, reachable_from};
pub use ranking::{Histogram, Hub, rank_hubs, out_degrees, sorted_by_count};
pub use pairing::{DirectionMismatch, check_direction_pairing, opposite_direction};

// ============================================================================
// AnalysisResult
// ============================================================================

/// Everything one run found. Built once, never mutated, and serializable as
/// plain maps and arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_rooms: usize,
    /// Room count the run was configured to expect.
    #[serde(default)]
    pub expected_room_count: Option<usize>,
    /// Whether `direction_mismatches` was computed.
    #[serde(default)]
    pub strict_direction_pairing: bool,
    /// room id → distinct target ids
    pub connection_graph: IndexMap<RoomId, Vec<RoomId>>,
    pub violations: Vec<Violation>,
    pub top_hubs: Vec<Hub>,
    pub connected_components: Vec<Vec<RoomId>>,
    pub isolated_rooms: Vec<RoomId>,
    pub room_types: Histogram,
    pub region_stats: Histogram,
    pub location_stats: Histogram,
    pub direction_stats: Histogram,
    pub room_degrees: IndexMap<RoomId, usize>,
    pub rooms_without_exits: Vec<RoomId>,
    pub single_exit_rooms: Vec<RoomId>,
    /// Empty unless strict direction pairing was enabled.
    pub direction_mismatches: Vec<DirectionMismatch>,
}

impl AnalysisResult {
    pub fn missing_targets(&self) -> impl Iterator<Item = &Violation> {
        self.violations_of(ViolationKind::MissingTarget)
    }

    pub fn no_reverse(&self) -> impl Iterator<Item = &Violation> {
        self.violations_of(ViolationKind::NoReverse)
    }

    pub fn violations_of(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }

    pub fn is_fully_connected(&self) -> bool {
        self.connected_components.len() <= 1
    }

    /// Index of the component holding `room`.
    pub fn component_of(&self, room: &str) -> Option<usize> {
        self.connected_components
            .iter()
            .position(|c| c.iter().any(|id| id.as_str() == room))
    }

    /// Problems worth a human's attention, in report order.
    pub fn issues(&self) -> Vec<Issue> {
        let mut issues = Vec::new();

        if let Some(expected) = self.expected_room_count {
            if expected != self.total_rooms {
                issues.push(Issue::RoomCountMismatch { expected, actual: self.total_rooms });
            }
        }
        if !self.isolated_rooms.is_empty() {
            issues.push(Issue::IsolatedRooms(self.isolated_rooms.len()));
        }
        let missing = self.missing_targets().count();
        if missing > 0 {
            issues.push(Issue::MissingTargets(missing));
        }
        let one_way = self.no_reverse().count();
        if one_way > 0 {
            issues.push(Issue::OneWayConnections(one_way));
        }
        if !self.is_fully_connected() {
            issues.push(Issue::Disconnected(self.connected_components.len()));
        }
        if !self.direction_mismatches.is_empty() {
            issues.push(Issue::DirectionMismatches(self.direction_mismatches.len()));
        }

        issues
    }
}

// ============================================================================
// Issue
// ============================================================================

/// One line of the run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", content = "detail", rename_all = "snake_case")]
pub enum Issue {
    RoomCountMismatch { expected: usize, actual: usize },
    IsolatedRooms(usize),
    MissingTargets(usize),
    OneWayConnections(usize),
    Disconnected(usize),
    DirectionMismatches(usize),
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::RoomCountMismatch { expected, actual } => {
                write!(f, "room count mismatch (actual: {actual}, expected: {expected})")
            }
            Issue::IsolatedRooms(n) => write!(f, "{n} room(s) unreachable from the first room"),
            Issue::MissingTargets(n) => write!(f, "{n} exit(s) point to rooms that do not exist"),
            Issue::OneWayConnections(n) => write!(f, "{n} connection(s) have no way back"),
            Issue::Disconnected(n) => write!(f, "map is not connected: {n} components"),
            Issue::DirectionMismatches(n) => write!(f, "{n} exit(s) lack an opposite-direction return exit"),
        }
    }
}

// ============================================================================
// Analyzer
// ============================================================================

/// Runs all passes with one configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, catalog: &RoomCatalog, graph: &ConnectionGraph) -> AnalysisResult {
        let violations = check_symmetry(graph);
        let connected_components = connected_components(graph);
        let direction_mismatches = if self.config.strict_direction_pairing {
            check_direction_pairing(catalog)
        } else {
            Vec::new()
        };

        let result = AnalysisResult {
            total_rooms: catalog.len(),
            expected_room_count: self.config.expected_room_count,
            strict_direction_pairing: self.config.strict_direction_pairing,
            connection_graph: graph.adjacency(),
            violations,
            top_hubs: rank_hubs(graph, self.config.hub_limit),
            connected_components,
            isolated_rooms: isolated_rooms(graph),
            room_types: ranking::tally_room_types(catalog),
            region_stats: ranking::tally_regions(catalog),
            location_stats: ranking::tally_locations(catalog),
            direction_stats: ranking::tally_directions(catalog),
            room_degrees: out_degrees(graph),
            rooms_without_exits: ranking::rooms_without_exits(catalog),
            single_exit_rooms: ranking::single_exit_rooms(catalog),
            direction_mismatches,
        };

        tracing::info!(
            rooms = result.total_rooms,
            violations = result.violations.len(),
            components = result.connected_components.len(),
            isolated = result.isolated_rooms.len(),
            "analysis complete"
        );
        result
    }
}
