//! # Document Sources
//!
//! The contract between the analysis engine and wherever world documents
//! live. The catalog builder only ever sees `DocumentSource`.
//!
//! ## Implementations
//!
//! | Source | Module | Description |
//! |--------|--------|-------------|
//! | `FileSource` | `file` | JSON document on disk |
//! | `JsonSource` | here | JSON text already in memory (tests, embedding) |

pub mod file;

use crate::model::WorldDocument;
use crate::{Error, Result};

pub use file::FileSource;

// ============================================================================
// DocumentSource trait
// ============================================================================

/// Something that can produce one world document.
///
/// A failed `load` must return [`Error::SourceUnreadable`]; the catalog
/// builder records it and moves on to the next source.
pub trait DocumentSource {
    /// Human-readable label used in logs and failure records.
    fn name(&self) -> &str;

    /// Read and parse the document.
    fn load(&self) -> Result<WorldDocument>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<WorldDocument> {
        (**self).load()
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<WorldDocument> {
        (**self).load()
    }
}

// ============================================================================
// JsonSource
// ============================================================================

/// A document held as JSON text in memory.
#[derive(Debug, Clone)]
pub struct JsonSource {
    name: String,
    text: String,
}

impl JsonSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }
}

impl DocumentSource for JsonSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<WorldDocument> {
        WorldDocument::from_json_str(&self.text).map_err(|e| Error::SourceUnreadable {
            source_name: self.name.clone(),
            reason: e.to_string(),
        })
    }
}
