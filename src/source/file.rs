//! JSON world document on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::WorldDocument;
use crate::{Error, Result};
use super::DocumentSource;

/// Reads one UTF-8 JSON file per `load`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<WorldDocument> {
        let unreadable = |reason: String| Error::SourceUnreadable {
            source_name: self.name.clone(),
            reason,
        };

        let text = fs::read_to_string(&self.path).map_err(|e| unreadable(e.to_string()))?;
        // Editors on some platforms prepend a BOM to UTF-8 files.
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        WorldDocument::from_json_str(text).map_err(|e| unreadable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_unreadable() {
        let src = FileSource::new("/definitely/not/here.json");
        assert!(matches!(src.load(), Err(Error::SourceUnreadable { .. })));
    }

    #[test]
    fn test_reads_file_with_bom() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}{{\"districts\":[{{\"locations\":[{{\"rooms\":[{{\"id\":\"a\"}}]}}]}}]}}").unwrap();

        let src = FileSource::new(file.path());
        let doc = src.load().unwrap();
        assert_eq!(doc.room_count(), 1);
        assert_eq!(src.path(), file.path());
    }
}
