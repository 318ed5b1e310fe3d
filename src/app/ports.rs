use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Where the sheet export comes from
pub trait SourcePort {
    fn fetch(&self) -> Result<SourcePayload>;
}

/// Raw bytes of one fetch plus what is needed to trace them
#[derive(Clone, Debug)]
pub struct SourcePayload {
    /// URL or file path the bytes were read from
    pub origin: String,
    pub bytes: Vec<u8>,
    pub sha256: String,
}

impl SourcePayload {
    pub fn new(origin: impl Into<String>, bytes: Vec<u8>) -> Self {
        let sha256 = {
            let mut h = Sha256::new();
            h.update(&bytes);
            hex::encode(h.finalize())
        };
        Self {
            origin: origin.into(),
            bytes,
            sha256,
        }
    }
}

/// Destination for the generated site
pub trait SiteOutputPort {
    /// Directory the artifacts end up in
    fn location(&self) -> &Path;

    /// Create the destination. Called only once ingestion has succeeded.
    fn prepare(&self) -> Result<()>;

    /// Replace `name` with `contents` in one step
    fn write_artifact(&self, name: &str, contents: &[u8]) -> Result<PathBuf>;
}
