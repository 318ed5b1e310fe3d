use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{Result, SitegenError};

/// JSON Schema for `locations.json`
pub const LOCATIONS_SCHEMA: &str = include_str!("../schemas/locations.v1.json");

pub fn locations_schema() -> Result<Value> {
    Ok(serde_json::from_str(LOCATIONS_SCHEMA)?)
}

/// Validate `instance` against `schema`, returning one message per
/// violation. An empty list means the instance is valid.
pub fn validate_against(schema: &Value, instance: &Value) -> Result<Vec<String>> {
    let compiled = JSONSchema::options()
        .compile(schema)
        .map_err(|e| SitegenError::Schema(format!("Failed to compile JSON Schema: {}", e)))?;

    let violations = match compiled.validate(instance) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|error| format!("{} at {}", error, error.instance_path))
            .collect(),
    };
    Ok(violations)
}

pub fn validate_locations(instance: &Value) -> Result<Vec<String>> {
    validate_against(&locations_schema()?, instance)
}
