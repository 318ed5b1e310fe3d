//! Static front-end emitted next to the data file.
//!
//! The shell, script and stylesheet are fixed text compiled into the binary.
//! Only `locations.json` depends on the ingested records.

use crate::constants::{INDEX_FILE, LOCATIONS_FILE, SCRIPT_FILE, STYLESHEET_FILE};
use crate::domain::Location;
use crate::error::Result;

pub const INDEX_HTML: &str = include_str!("../../assets/index.html");
pub const APP_JS: &str = include_str!("../../assets/app.js");
pub const STYLE_CSS: &str = include_str!("../../assets/style2.css");

/// One file of the generated site
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: &'static str,
    pub contents: String,
}

/// Pretty-printed with two-space indentation; non-ASCII text is written as is.
pub fn render_locations(locations: &[Location]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(locations)?;
    json.push('\n');
    Ok(json)
}

/// Every artifact in write order
pub fn render(locations: &[Location]) -> Result<Vec<Artifact>> {
    Ok(vec![
        Artifact {
            name: INDEX_FILE,
            contents: INDEX_HTML.to_string(),
        },
        Artifact {
            name: LOCATIONS_FILE,
            contents: render_locations(locations)?,
        },
        Artifact {
            name: SCRIPT_FILE,
            contents: APP_JS.to_string(),
        },
        Artifact {
            name: STYLESHEET_FILE,
            contents: STYLE_CSS.to_string(),
        },
    ])
}
