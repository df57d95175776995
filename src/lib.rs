//! # roomgraph - Room Graph Integrity Checker
//!
//! Validates the structure of a game world stored as hierarchical JSON
//! documents (districts → locations → rooms → exits): rooms nobody can reach,
//! exits to rooms that do not exist, exits with no way back, hub rooms, and
//! aggregate statistics.
//!
//! ## Design Principles
//!
//! 1. **Read-only**: the world data is never mutated; every run re-derives
//!    everything from the documents.
//! 2. **Findings are data**: broken exits end up in `AnalysisResult`, not in
//!    `Err`. The only fatal condition is an empty catalog.
//! 3. **Deterministic**: rooms, exits and targets are iterated in document
//!    order, so identical input yields an identical result.
//! 4. **Independent passes**: symmetry, components and statistics each reduce
//!    the same immutable snapshot into their own table.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roomgraph::{AnalysisConfig, FileSource, World};
//!
//! # fn example() -> roomgraph::Result<()> {
//! let world = World::load([
//!     FileSource::new("maps/city_part1.json"),
//!     FileSource::new("maps/city_part2.json"),
//! ])?;
//!
//! let result = world.analyze(&AnalysisConfig::default());
//! for v in &result.violations {
//!     println!("{} -> {}: {}", v.from, v.to, v.kind.as_str());
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod source;
pub mod catalog;
pub mod graph;
pub mod analysis;
pub mod config;
pub mod export;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Room, RoomId, Exit, ExitDetail, WorldDocument};
pub use source::{DocumentSource, FileSource, JsonSource};
pub use catalog::{RoomCatalog, CatalogBuilder, SourceFailure};
pub use graph::ConnectionGraph;
pub use analysis::{
    AnalysisResult, Analyzer, Issue, Violation, ViolationKind, Hub, Histogram,
    DirectionMismatch,
};
pub use config::AnalysisConfig;

// ============================================================================
// Top-level World handle
// ============================================================================

/// A loaded world: the catalog plus the connection graph derived from it.
#[derive(Debug, Clone)]
pub struct World {
    catalog: RoomCatalog,
    graph: ConnectionGraph,
}

impl World {
    /// Load every source. Unreadable sources are skipped; fails only when no
    /// room at all was recovered.
    pub fn load<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: DocumentSource,
    {
        Ok(Self::from_catalog(RoomCatalog::load(sources)?))
    }

    pub fn from_catalog(catalog: RoomCatalog) -> Self {
        let graph = ConnectionGraph::from_catalog(&catalog);
        Self { catalog, graph }
    }

    /// Run every analysis pass.
    pub fn analyze(&self, config: &AnalysisConfig) -> AnalysisResult {
        Analyzer::new(config.clone()).analyze(&self.catalog, &self.graph)
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unreadable source {source_name}: {reason}")]
    SourceUnreadable { source_name: String, reason: String },

    #[error("No rooms could be loaded ({failures} source(s) failed)")]
    EmptyCatalog { failures: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
