use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::ports::{SourcePayload, SourcePort};
use crate::error::Result;

/// Fetches the sheet export with one blocking GET. Non-2xx responses are
/// errors; there are no retries.
pub struct ReqwestSource {
    url: String,
    timeout: Duration,
}

impl ReqwestSource {
    pub fn new(url: impl Into<String>, timeout_seconds: u64) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(timeout_seconds),
        }
    }
}

impl SourcePort for ReqwestSource {
    fn fetch(&self) -> Result<SourcePayload> {
        info!(url = %self.url, "Fetching sheet export");
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let resp = client.get(&self.url).send()?.error_for_status()?;
        debug!(content_type = ?resp.headers().get(CONTENT_TYPE), "Sheet export received");
        let bytes = resp.bytes()?.to_vec();
        Ok(SourcePayload::new(self.url.clone(), bytes))
    }
}
