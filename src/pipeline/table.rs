use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Result, SitegenError};

/// Header row plus data rows exactly as the CSV export delivered them.
/// Rows may be shorter or longer than the header.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse comma-separated bytes whose first record is the header row.
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(SitegenError::Source {
                message: "CSV payload has no header row".to_string(),
            });
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(columns = headers.len(), rows = rows.len(), "Parsed CSV table");
        Ok(Self { headers, rows })
    }
}
