//! Analysis configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Knobs for one analysis run. Every field has a default, so a config file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// How many rooms the hub ranking keeps.
    pub hub_limit: usize,
    /// Room count the world is supposed to have; a mismatch becomes an issue.
    pub expected_room_count: Option<usize>,
    /// Also require `north` to be answered by `south` and so on.
    pub strict_direction_pairing: bool,
    /// Entries the text report lists per section before truncating.
    pub listing_limit: usize,
    /// Components up to this size have their rooms listed in the report.
    pub component_listing_max: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            hub_limit: 10,
            expected_room_count: None,
            strict_direction_pairing: false,
            listing_limit: 10,
            component_listing_max: 10,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn with_hub_limit(mut self, limit: usize) -> Self {
        self.hub_limit = limit;
        self
    }

    pub fn with_expected_room_count(mut self, count: usize) -> Self {
        self.expected_room_count = Some(count);
        self
    }

    pub fn with_strict_direction_pairing(mut self, enabled: bool) -> Self {
        self.strict_direction_pairing = enabled;
        self
    }

    pub fn with_listing_limit(mut self, limit: usize) -> Self {
        self.listing_limit = limit;
        self
    }
}
