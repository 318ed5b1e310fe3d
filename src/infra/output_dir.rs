use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{DESKTOP_FOLDER, OUTPUT_FOLDER};
use crate::error::Result;

/// Pick the output directory: an explicit one wins; otherwise the output
/// folder goes on the desktop when `$HOME/Desktop` exists, else in the
/// current directory.
pub fn resolve_output_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let cwd = env::current_dir()?;
    Ok(default_output_dir(dirs::home_dir().as_deref(), &cwd))
}

pub fn default_output_dir(home: Option<&Path>, cwd: &Path) -> PathBuf {
    let desktop = home.map(|h| h.join(DESKTOP_FOLDER)).filter(|d| d.is_dir());
    desktop.unwrap_or_else(|| cwd.to_path_buf()).join(OUTPUT_FOLDER)
}
