pub mod file_source;
pub mod http_client;
pub mod output_dir;
pub mod site_writer;

use crate::app::ports::SourcePort;
use crate::config::SourceConfig;

/// Build the source adapter the configuration asks for
pub fn source_for(config: &SourceConfig) -> Box<dyn SourcePort> {
    match &config.file {
        Some(path) => Box::new(file_source::FileSource::new(path.clone())),
        None => Box::new(http_client::ReqwestSource::new(
            config.url.clone(),
            config.timeout_seconds,
        )),
    }
}
