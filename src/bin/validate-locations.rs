use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::{fs, path::PathBuf};

use srisailam_nav::schema;

/// Validate a generated locations.json against the locations schema.
#[derive(Parser, Debug)]
#[command(name = "validate-locations", version, about = "Validate locations JSON against schema")]
struct Cli {
    /// Path to the locations JSON file to validate
    path: PathBuf,

    /// Optional path to a schema file (defaults to the bundled locations.v1 schema)
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn load_json(path: &PathBuf) -> Result<Value> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let json: Value = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    Ok(json)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let schema_json = match &args.schema {
        Some(path) => load_json(path)?,
        None => schema::locations_schema().context("Bundled schema is not valid JSON")?,
    };
    let instance = load_json(&args.path)?;

    let violations = schema::validate_against(&schema_json, &instance)?;
    if violations.is_empty() {
        println!("valid");
        return Ok(());
    }

    eprintln!("invalid:");
    for violation in &violations {
        eprintln!("- {}", violation);
    }
    std::process::exit(1)
}
