use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

use crate::app::ports::SiteOutputPort;
use crate::error::Result;

/// Writes artifacts into a directory. Each file is staged in a temporary
/// file inside the same directory and then renamed over the target.
pub struct FsSiteWriter {
    dir: PathBuf,
}

impl FsSiteWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SiteOutputPort for FsSiteWriter {
    fn location(&self) -> &Path {
        &self.dir
    }

    fn prepare(&self) -> Result<()> {
        if !self.dir.exists() {
            info!(dir = %self.dir.display(), "Creating output directory");
        }
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn write_artifact(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let target = self.dir.join(name);
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(contents)?;
        staged.as_file().sync_all()?;
        staged.persist(&target)?;
        Ok(target)
    }
}
