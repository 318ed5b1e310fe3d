//! Ingestion stages that turn a raw sheet export into [`Location`] records.
//!
//! Each stage is a plain function over owned data so it can be tested on its
//! own; [`ingest`] composes them in order:
//! normalize headers, require columns, coerce nulls, parse coordinates,
//! normalize category, drop invalid rows, project.

use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::constants::{self, CATEGORY, LATITUDE, LONGITUDE, REQUIRED_COLUMNS};
use crate::domain::Location;
use crate::error::{Result, SitegenError};
use crate::pipeline::table::RawTable;

/// Row keyed by normalized column name. `None` marks a cell the source row
/// did not have at all.
pub type RawRow = BTreeMap<String, Option<String>>;

/// Row after null coercion: every column has a string value.
pub type Row = BTreeMap<String, String>;

/// Table whose column names have been normalized
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Row with its coordinates parsed; `None` means the cell did not parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub fields: Row,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Row that survived coordinate filtering
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRow {
    pub fields: Row,
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of one ingestion run
#[derive(Debug, Clone)]
pub struct Ingested {
    pub locations: Vec<Location>,
    /// Data rows in the source, before filtering
    pub total_rows: usize,
    /// Rows dropped for unparseable coordinates
    pub skipped: usize,
}

pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Key every row by its normalized column name. When two headers normalize
/// to the same name the first one wins.
pub fn normalize_headers(raw: RawTable) -> Table {
    let mut columns: Vec<String> = Vec::with_capacity(raw.headers.len());
    // Index into the raw row for each kept column
    let mut sources: Vec<usize> = Vec::with_capacity(raw.headers.len());

    for (idx, header) in raw.headers.iter().enumerate() {
        let name = normalize_header(header);
        if columns.contains(&name) {
            warn!(column = %name, "Duplicate column after header normalization, keeping the first");
            continue;
        }
        columns.push(name);
        sources.push(idx);
    }

    let rows: Vec<RawRow> = raw
        .rows
        .into_iter()
        .map(|mut cells| {
            columns
                .iter()
                .zip(&sources)
                .map(|(name, &idx)| {
                    let cell = cells.get_mut(idx).map(std::mem::take);
                    (name.clone(), cell)
                })
                .collect()
        })
        .collect();

    Table { columns, rows }
}

/// Fail on the first required column (in required order) that the table
/// lacks. Every missing column is logged before returning.
pub fn require_columns(columns: &[String]) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !columns.iter().any(|c| c == required))
        .collect();

    match missing.first() {
        None => Ok(()),
        Some(first) => {
            warn!(missing = ?missing, "Source is missing required columns");
            Err(SitegenError::MissingColumn((*first).to_string()))
        }
    }
}

/// Replace absent cells and null markers with empty strings.
pub fn coerce_nulls(rows: Vec<RawRow>) -> Vec<Row> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(column, cell)| {
                    let value = match cell {
                        Some(text) if !constants::is_null_marker(&text) => text,
                        _ => String::new(),
                    };
                    (column, value)
                })
                .collect()
        })
        .collect()
}

/// Parse a coordinate cell. Surrounding whitespace is ignored; NaN and
/// infinities count as unparseable since JSON cannot carry them.
pub fn parse_coordinate(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_coordinates(rows: Vec<Row>) -> Vec<ParsedRow> {
    rows.into_iter()
        .map(|fields| {
            let latitude = fields.get(LATITUDE).and_then(|c| parse_coordinate(c));
            let longitude = fields.get(LONGITUDE).and_then(|c| parse_coordinate(c));
            ParsedRow { fields, latitude, longitude }
        })
        .collect()
}

pub fn normalize_category_value(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub fn normalize_category(rows: Vec<ParsedRow>) -> Vec<ParsedRow> {
    rows.into_iter()
        .map(|mut row| {
            if let Some(category) = row.fields.get_mut(CATEGORY) {
                *category = normalize_category_value(category);
            }
            row
        })
        .collect()
}

/// Drop rows whose latitude or longitude did not parse. Returns the kept
/// rows in source order and the number dropped.
pub fn filter_invalid(rows: Vec<ParsedRow>) -> (Vec<ValidRow>, usize) {
    let before = rows.len();
    let kept: Vec<ValidRow> = rows
        .into_iter()
        .filter_map(|row| match (row.latitude, row.longitude) {
            (Some(latitude), Some(longitude)) => Some(ValidRow {
                fields: row.fields,
                latitude,
                longitude,
            }),
            _ => {
                debug!(name = ?row.fields.get(constants::DISPLAY_NAME), "Dropping row with invalid coordinates");
                None
            }
        })
        .collect();
    let skipped = before - kept.len();
    (kept, skipped)
}

/// Restrict each row to the required columns. Extra source columns are
/// discarded.
pub fn project(rows: Vec<ValidRow>) -> Vec<Location> {
    rows.into_iter()
        .map(|row| {
            let mut fields = row.fields;
            let mut take = |column: &str| fields.remove(column).unwrap_or_default();
            Location {
                display_name: take(constants::DISPLAY_NAME),
                name_te: take("name_te"),
                name_hi: take("name_hi"),
                name_ta: take("name_ta"),
                name_kn: take("name_kn"),
                name_ml: take("name_ml"),
                description_en: take("description_en"),
                description_te: take("description_te"),
                description_hi: take("description_hi"),
                description_ta: take("description_ta"),
                description_kn: take("description_kn"),
                description_ml: take("description_ml"),
                category: take(CATEGORY),
                latitude: row.latitude,
                longitude: row.longitude,
            }
        })
        .collect()
}

/// Run every stage over a raw table. A missing required column aborts the
/// run; rows with bad coordinates are counted and dropped.
pub fn ingest(raw: RawTable) -> Result<Ingested> {
    let table = normalize_headers(raw);
    require_columns(&table.columns)?;

    let total_rows = table.rows.len();
    let rows = coerce_nulls(table.rows);
    let rows = parse_coordinates(rows);
    let rows = normalize_category(rows);
    let (rows, skipped) = filter_invalid(rows);
    let locations = project(rows);

    if skipped > 0 {
        warn!(skipped, "Skipped {} invalid rows due to missing coordinates", skipped);
    }
    if !locations
        .iter()
        .any(|l| l.category == constants::FREE_ENTRANCE_CATEGORY)
    {
        warn!(
            category = constants::FREE_ENTRANCE_CATEGORY,
            "No location carries the free entrance category; the featured button will not render"
        );
    }
    info!(total_rows, kept = locations.len(), skipped, "Ingestion complete");

    Ok(Ingested {
        locations,
        total_rows,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_line() -> String {
        REQUIRED_COLUMNS.join(",")
    }

    fn row_line(name: &str, category: &str, lat: &str, lon: &str) -> String {
        let mut cells = vec![name.to_string()];
        cells.extend(std::iter::repeat(String::new()).take(11));
        cells.push(category.to_string());
        cells.push(lat.to_string());
        cells.push(lon.to_string());
        cells.join(",")
    }

    fn raw(lines: &[String]) -> RawTable {
        RawTable::from_csv(lines.join("\n").as_bytes()).unwrap()
    }

    #[test]
    fn test_header_normalization_trims_and_lowercases() {
        assert_eq!(normalize_header("  Display Name "), "display name");
        assert_eq!(normalize_header("\u{feff}Display Name"), "display name");
        assert_eq!(normalize_header("LATITUDE"), "latitude");
    }

    #[test]
    fn test_duplicate_headers_keep_first() {
        let table = normalize_headers(RawTable {
            headers: vec!["Category".into(), " category".into()],
            rows: vec![vec!["temple".into(), "food".into()]],
        });
        assert_eq!(table.columns, vec!["category"]);
        assert_eq!(table.rows[0]["category"], Some("temple".to_string()));
    }

    #[test]
    fn test_short_rows_have_absent_cells() {
        let table = normalize_headers(RawTable {
            headers: vec!["a".into(), "b".into()],
            rows: vec![vec!["1".into()]],
        });
        assert_eq!(table.rows[0]["a"], Some("1".to_string()));
        assert_eq!(table.rows[0]["b"], None);
    }

    #[test]
    fn test_require_columns_names_first_missing() {
        let columns: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| **c != "description_ml" && **c != "longitude")
            .map(|c| c.to_string())
            .collect();
        let err = require_columns(&columns).unwrap_err();
        assert!(matches!(&err, SitegenError::MissingColumn(c) if c == "description_ml"));
        assert_eq!(err.to_string(), "Missing required column: description_ml");
    }

    #[test]
    fn test_each_missing_column_is_fatal() {
        for dropped in REQUIRED_COLUMNS {
            let columns: Vec<String> = REQUIRED_COLUMNS
                .iter()
                .filter(|c| **c != dropped)
                .map(|c| c.to_string())
                .collect();
            match require_columns(&columns) {
                Err(SitegenError::MissingColumn(c)) => assert_eq!(c, dropped),
                other => panic!("expected missing {}, got {:?}", dropped, other),
            }
        }
    }

    #[test]
    fn test_coerce_nulls_uses_empty_strings() {
        let mut row = RawRow::new();
        row.insert("name_hi".into(), None);
        row.insert("name_te".into(), Some("NaN".into()));
        row.insert("name_ta".into(), Some("".into()));
        row.insert("name_kn".into(), Some("Gudi".into()));

        let rows = coerce_nulls(vec![row]);
        assert_eq!(rows[0]["name_hi"], "");
        assert_eq!(rows[0]["name_te"], "");
        assert_eq!(rows[0]["name_ta"], "");
        assert_eq!(rows[0]["name_kn"], "Gudi");
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("16.07"), Some(16.07));
        assert_eq!(parse_coordinate(" 78.87 "), Some(78.87));
        assert_eq!(parse_coordinate("-12"), Some(-12.0));
        assert_eq!(parse_coordinate("1e1"), Some(10.0));
        assert_eq!(parse_coordinate("abc"), None);
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate("inf"), None);
    }

    #[test]
    fn test_category_normalization_is_idempotent() {
        for raw in [" temple ", "Tourist_Spot", "sarva darshanam entrance", "", "ఆలయం"] {
            let once = normalize_category_value(raw);
            assert_eq!(normalize_category_value(&once), once);
        }
        assert_eq!(normalize_category_value(" temple "), "TEMPLE");
    }

    #[test]
    fn test_filter_counts_dropped_rows() {
        let rows = vec![
            ParsedRow { fields: Row::new(), latitude: Some(1.0), longitude: Some(2.0) },
            ParsedRow { fields: Row::new(), latitude: None, longitude: Some(2.0) },
            ParsedRow { fields: Row::new(), latitude: Some(1.0), longitude: None },
        ];
        let (kept, skipped) = filter_invalid(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_scenario_valid_row() {
        let ingested = ingest(raw(&[header_line(), row_line("Main Temple", " temple ", "16.07", "78.87")])).unwrap();
        assert_eq!(ingested.locations.len(), 1);
        let loc = &ingested.locations[0];
        assert_eq!(loc.category, "TEMPLE");
        assert_eq!(loc.latitude, 16.07);
        assert_eq!(loc.longitude, 78.87);
        assert_eq!(loc.name_hi, "");
        assert_eq!(ingested.skipped, 0);
    }

    #[test]
    fn test_scenario_invalid_latitude_is_skipped() {
        let ingested = ingest(raw(&[header_line(), row_line("Gate", "FACILITY", "abc", "78.87")])).unwrap();
        assert!(ingested.locations.is_empty());
        assert_eq!(ingested.skipped, 1);
        assert_eq!(ingested.total_rows, 1);
    }

    #[test]
    fn test_scenario_row_drop_accounting() {
        let mut lines = vec![header_line()];
        for i in 0..10 {
            let lat = if i == 3 || i == 7 { "" } else { "16.1" };
            lines.push(row_line(&format!("Place {}", i), "food", lat, "78.9"));
        }
        let ingested = ingest(raw(&lines)).unwrap();
        assert_eq!(ingested.locations.len(), 8);
        assert_eq!(ingested.skipped, 2);
        assert_eq!(ingested.total_rows - ingested.skipped, ingested.locations.len());
        // Order is preserved across the drop
        let names: Vec<&str> = ingested.locations.iter().map(|l| l.display_name.as_str()).collect();
        assert_eq!(names[2], "Place 2");
        assert_eq!(names[3], "Place 4");
        assert_eq!(names[7], "Place 9");
    }

    #[test]
    fn test_headers_are_matched_case_insensitively() {
        let header = REQUIRED_COLUMNS
            .iter()
            .map(|c| format!("  {} ", c.to_uppercase()))
            .collect::<Vec<_>>()
            .join(",");
        let ingested = ingest(raw(&[header, row_line("Main Temple", "TEMPLE", "16.07", "78.87")])).unwrap();
        assert_eq!(ingested.locations[0].display_name, "Main Temple");
    }

    #[test]
    fn test_extra_columns_are_discarded() {
        let header = format!("notes,{},photo", header_line());
        let row = format!("ignore me,{},pic.jpg", row_line("Main Temple", "TEMPLE", "16.07", "78.87"));
        let ingested = ingest(raw(&[header, row])).unwrap();

        let value = serde_json::to_value(&ingested.locations[0]).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), REQUIRED_COLUMNS.len());
        assert!(!object.contains_key("notes"));
        assert!(!object.contains_key("photo"));
    }

    #[test]
    fn test_sentinel_category_passes_through() {
        let ingested = ingest(raw(&[
            header_line(),
            row_line("Free Queue", " Sarva Darshanam Entrance ", "16.07", "78.87"),
        ]))
        .unwrap();
        assert_eq!(ingested.locations[0].category, constants::FREE_ENTRANCE_CATEGORY);
    }

    #[test]
    fn test_missing_column_aborts_ingest() {
        let header = REQUIRED_COLUMNS
            .iter()
            .filter(|c| **c != "description_ml")
            .copied()
            .collect::<Vec<_>>()
            .join(",");
        let result = ingest(raw(&[header]));
        assert!(matches!(result, Err(SitegenError::MissingColumn(c)) if c == "description_ml"));
    }
}
