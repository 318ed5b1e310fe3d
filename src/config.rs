use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants;
use crate::error::{Result, SitegenError};

pub const CONFIG_FILE: &str = "sitegen.toml";

/// Generator settings. Sources, lowest precedence first: built-in defaults,
/// `sitegen.toml`, `SITEGEN_*` environment variables, then CLI flags
/// (applied by the caller through [`Config::with_overrides`]).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    /// Local CSV file; takes precedence over `url` when set
    pub file: Option<PathBuf>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Explicit output directory; when unset the desktop/cwd fallback applies
    pub dir: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: constants::DEFAULT_SOURCE_URL.to_string(),
            file: None,
            timeout_seconds: constants::DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source_url: Option<String>,
    pub source_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load `sitegen.toml` from the working directory if present, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let config = Self::from_file_if_exists(Path::new(CONFIG_FILE))?;
        config.with_env()
    }

    pub fn from_file_if_exists(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            SitegenError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn with_env(mut self) -> Result<Self> {
        if let Ok(url) = env::var("SITEGEN_SOURCE_URL") {
            self.source.url = url;
        }
        if let Ok(file) = env::var("SITEGEN_SOURCE_FILE") {
            self.source.file = Some(PathBuf::from(file));
        }
        if let Ok(dir) = env::var("SITEGEN_OUTPUT_DIR") {
            self.output.dir = Some(PathBuf::from(dir));
        }
        if let Ok(timeout) = env::var("SITEGEN_TIMEOUT_SECONDS") {
            self.source.timeout_seconds = timeout.parse().map_err(|_| {
                SitegenError::Config(format!("SITEGEN_TIMEOUT_SECONDS is not a number: {}", timeout))
            })?;
        }
        Ok(self)
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(url) = overrides.source_url {
            self.source.url = url;
            // An explicit URL on the command line beats a file from config
            self.source.file = None;
        }
        if let Some(file) = overrides.source_file {
            self.source.file = Some(file);
        }
        if let Some(dir) = overrides.output_dir {
            self.output.dir = Some(dir);
        }
        self
    }
}
