use serde::Serialize;

/// One point of interest as written to `locations.json`.
///
/// Field order and serialized names match the required column list, so the
/// data file carries exactly those keys in that order. Text fields are never
/// absent: a missing cell is an empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    #[serde(rename = "display name")]
    pub display_name: String,
    pub name_te: String,
    pub name_hi: String,
    pub name_ta: String,
    pub name_kn: String,
    pub name_ml: String,
    pub description_en: String,
    pub description_te: String,
    pub description_hi: String,
    pub description_ta: String,
    pub description_kn: String,
    pub description_ml: String,
    /// Trimmed and upper-cased; not checked against a closed set
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
}
