//! Fixed values shared by the ingestion pipeline and the site writer.

/// Published CSV export of the locations sheet
pub const DEFAULT_SOURCE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vT_lzbX4EaUcfvJjJZVl-AcMdyosxKyhghJZwvm1wlD0lE7UqFpLH73Lh3eHQf0pPr6pXZag8P64odh/pub?output=csv";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

// Column names, as they appear after header normalization
pub const DISPLAY_NAME: &str = "display name";
pub const CATEGORY: &str = "category";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";

/// Every column the sheet must provide, in output order
pub const REQUIRED_COLUMNS: [&str; 15] = [
    DISPLAY_NAME,
    "name_te",
    "name_hi",
    "name_ta",
    "name_kn",
    "name_ml",
    "description_en",
    "description_te",
    "description_hi",
    "description_ta",
    "description_kn",
    "description_ml",
    CATEGORY,
    LATITUDE,
    LONGITUDE,
];

/// Cell values a spreadsheet export uses to mean "no value"
pub const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Category the front-end features as the free entrance button.
/// Matched by exact string equality after normalization.
pub const FREE_ENTRANCE_CATEGORY: &str = "SARVA DARSHANAM ENTRANCE";

// Output layout
pub const OUTPUT_FOLDER: &str = "Srisailam_Navigation_Output";
pub const DESKTOP_FOLDER: &str = "Desktop";
pub const LOCATIONS_FILE: &str = "locations.json";
pub const INDEX_FILE: &str = "index.html";
pub const SCRIPT_FILE: &str = "app.js";
pub const STYLESHEET_FILE: &str = "style2.css";

/// Get all artifact file names in the order they are written
pub fn artifact_files() -> Vec<&'static str> {
    vec![INDEX_FILE, LOCATIONS_FILE, SCRIPT_FILE, STYLESHEET_FILE]
}

/// Returns true when a raw cell should be treated as missing
pub fn is_null_marker(cell: &str) -> bool {
    NULL_MARKERS.contains(&cell)
}
