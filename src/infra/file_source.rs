use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::app::ports::{SourcePayload, SourcePort};
use crate::error::{Result, SitegenError};

/// Reads a previously downloaded export from disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SourcePort for FileSource {
    fn fetch(&self) -> Result<SourcePayload> {
        info!(path = %self.path.display(), "Reading sheet export from file");
        let bytes = fs::read(&self.path).map_err(|e| SitegenError::Source {
            message: format!("Failed to read {}: {}", self.path.display(), e),
        })?;
        Ok(SourcePayload::new(self.path.display().to_string(), bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"display name\nTemple\n").unwrap();

        let payload = FileSource::new(file.path()).fetch().unwrap();
        assert_eq!(payload.bytes, b"display name\nTemple\n");
        assert_eq!(payload.sha256.len(), 64);
    }

    #[test]
    fn test_missing_file_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileSource::new(dir.path().join("nope.csv")).fetch();
        assert!(matches!(result, Err(SitegenError::Source { .. })));
    }
}
