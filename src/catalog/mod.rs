//! # Room Catalog
//!
//! Normalizes any number of world documents into one mapping from room id to
//! room metadata and one mapping from room id to its raw exits.
//!
//! ## Rules
//!
//! - Rooms keep the position of their first appearance; a later document that
//!   repeats an id silently replaces the earlier room and its exits
//!   (last write wins).
//! - A source that fails to load is recorded as a [`SourceFailure`] and
//!   skipped. The rest of the run continues.
//! - Building a catalog with zero rooms is the one fatal case:
//!   [`Error::EmptyCatalog`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::*;
use crate::source::DocumentSource;
use crate::{Error, Result};

// ============================================================================
// SourceFailure
// ============================================================================

/// A document that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFailure {
    pub source: String,
    pub reason: String,
}

// ============================================================================
// RoomCatalog
// ============================================================================

/// Immutable snapshot of every room recovered from the loaded documents.
/// Never empty.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: IndexMap<RoomId, Room>,
    /// room id → exits in original document order
    exits: IndexMap<RoomId, Vec<Exit>>,
    sources_loaded: usize,
    failures: Vec<SourceFailure>,
}

impl RoomCatalog {
    /// Load every source and build the catalog in one go.
    pub fn load<I, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: DocumentSource,
    {
        let mut builder = CatalogBuilder::new();
        for source in sources {
            builder.add_source(&source);
        }
        builder.build()
    }

    /// Build a catalog straight from normalized rooms.
    pub fn from_rooms(rooms: impl IntoIterator<Item = (Room, Vec<Exit>)>) -> Result<Self> {
        let mut builder = CatalogBuilder::new();
        for (room, exits) in rooms {
            builder.add_room(room, exits);
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Display name for a room, falling back to the id for unknown rooms.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.rooms.get(id).map_or(id, |r| r.name.as_str())
    }

    /// Raw exits of a room, empty for rooms without exits or unknown ids.
    pub fn exits(&self, id: &str) -> &[Exit] {
        self.exits.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rooms in catalog order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn room_ids(&self) -> impl Iterator<Item = &RoomId> {
        self.rooms.keys()
    }

    /// Every room with its raw exits, in catalog order.
    pub fn iter_exits(&self) -> impl Iterator<Item = (&RoomId, &[Exit])> {
        self.exits.iter().map(|(id, exits)| (id, exits.as_slice()))
    }

    pub fn exit_count(&self) -> usize {
        self.exits.values().map(Vec::len).sum()
    }

    /// Number of documents that loaded successfully.
    pub fn sources_loaded(&self) -> usize {
        self.sources_loaded
    }

    pub fn failures(&self) -> &[SourceFailure] {
        &self.failures
    }
}

// ============================================================================
// CatalogBuilder
// ============================================================================

/// Accumulates documents into a [`RoomCatalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    rooms: IndexMap<RoomId, Room>,
    exits: IndexMap<RoomId, Vec<Exit>>,
    sources_loaded: usize,
    failures: Vec<SourceFailure>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a source; a failure is recorded rather than returned.
    pub fn add_source<S: DocumentSource + ?Sized>(&mut self, source: &S) -> &mut Self {
        match source.load() {
            Ok(doc) => {
                tracing::debug!(source = source.name(), rooms = doc.room_count(), "loaded world document");
                self.add_document(doc);
            }
            Err(err) => {
                tracing::warn!(source = source.name(), error = %err, "skipping unreadable world document");
                let reason = match err {
                    Error::SourceUnreadable { reason, .. } => reason,
                    other => other.to_string(),
                };
                self.failures.push(SourceFailure {
                    source: source.name().to_string(),
                    reason,
                });
            }
        }
        self
    }

    pub fn add_document(&mut self, doc: WorldDocument) -> &mut Self {
        self.sources_loaded += 1;
        for (room, exits) in doc.into_rooms() {
            self.add_room(room, exits);
        }
        self
    }

    pub fn add_room(&mut self, room: Room, exits: Vec<Exit>) -> &mut Self {
        let id = room.id.clone();
        self.rooms.insert(id.clone(), room);
        self.exits.insert(id, exits);
        self
    }

    pub fn build(self) -> Result<RoomCatalog> {
        if self.rooms.is_empty() {
            return Err(Error::EmptyCatalog { failures: self.failures.len() });
        }
        Ok(RoomCatalog {
            rooms: self.rooms,
            exits: self.exits,
            sources_loaded: self.sources_loaded,
            failures: self.failures,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
