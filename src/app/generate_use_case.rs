use std::path::PathBuf;
use tracing::{info, info_span};

use crate::app::ports::{SiteOutputPort, SourcePort};
use crate::error::{Result, SitegenError};
use crate::pipeline::{ingest, Ingested, RawTable};
use crate::{schema, site};

/// Summary of a successful generator run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub files: Vec<String>,
    pub location_count: usize,
    pub total_rows: usize,
    pub skipped: usize,
    pub source_sha256: String,
}

/// Use case for turning the remote sheet into the static site
pub struct GenerateUseCase {
    source: Box<dyn SourcePort>,
}

impl GenerateUseCase {
    pub fn new(source: Box<dyn SourcePort>) -> Self {
        Self { source }
    }

    /// Fetch and ingest without writing anything
    pub fn ingest(&self) -> Result<(Ingested, String)> {
        let payload = self.source.fetch()?;
        info!(
            origin = %payload.origin,
            bytes = payload.bytes.len(),
            sha256 = %payload.sha256,
            "Fetched source payload"
        );
        let table = RawTable::from_csv(&payload.bytes)?;
        let ingested = ingest(table)?;
        Ok((ingested, payload.sha256))
    }

    /// Full run: ingest, check the data file against its schema, then write
    /// every artifact. Nothing touches the output until the data is known good.
    pub fn generate(&self, output: &dyn SiteOutputPort) -> Result<GenerateReport> {
        let span = info_span!("generate", output = %output.location().display());
        let _enter = span.enter();

        let (ingested, source_sha256) = self.ingest()?;

        let data = serde_json::to_value(&ingested.locations)?;
        let violations = schema::validate_locations(&data)?;
        if let Some(first) = violations.first() {
            return Err(SitegenError::Schema(first.clone()));
        }

        let artifacts = site::render(&ingested.locations)?;

        output.prepare()?;
        let mut files = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            let path = output.write_artifact(artifact.name, artifact.contents.as_bytes())?;
            info!(path = %path.display(), "Wrote artifact");
            files.push(artifact.name.to_string());
        }

        Ok(GenerateReport {
            output_dir: output.location().to_path_buf(),
            files,
            location_count: ingested.locations.len(),
            total_rows: ingested.total_rows,
            skipped: ingested.skipped,
            source_sha256,
        })
    }
}
