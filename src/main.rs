use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use srisailam_nav::app::generate_use_case::GenerateUseCase;
use srisailam_nav::config::{Config, Overrides};
use srisailam_nav::infra::{self, output_dir, site_writer::FsSiteWriter};
use srisailam_nav::logging;

#[derive(Parser)]
#[command(name = "srisailam_nav")]
#[command(about = "Generate the Srisailam navigation site from the locations sheet")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the sheet and write the site (default)
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        /// Directory to write into (defaults to Desktop or the current directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Fetch and validate the sheet without writing anything
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Default)]
struct SourceArgs {
    /// CSV export URL to fetch instead of the configured one
    #[arg(long, conflicts_with = "source_file")]
    source_url: Option<String>,
    /// Read a local CSV file instead of fetching
    #[arg(long)]
    source_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    logging::init_logging();

    let command = cli.command.unwrap_or(Commands::Generate {
        source: SourceArgs::default(),
        output_dir: None,
    });

    let result = match command {
        Commands::Generate { source, output_dir } => generate(source, output_dir),
        Commands::Check { source } => check(source),
    };
    if let Err(e) = &result {
        error!("Run failed: {:#}", e);
    }
    result
}

fn load_config(source: SourceArgs, output_override: Option<PathBuf>) -> anyhow::Result<Config> {
    let config = Config::load().context("Failed to load configuration")?;
    Ok(config.with_overrides(Overrides {
        source_url: source.source_url,
        source_file: source.source_file,
        output_dir: output_override,
    }))
}

fn generate(source: SourceArgs, output_override: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(source, output_override)?;
    let dir = output_dir::resolve_output_dir(config.output.dir.clone())
        .context("Failed to resolve output directory")?;
    info!(dir = %dir.display(), "Generating site");

    let use_case = GenerateUseCase::new(infra::source_for(&config.source));
    let writer = FsSiteWriter::new(dir);
    let report = use_case.generate(&writer)?;

    if report.skipped > 0 {
        println!("⚠️  Skipped {} invalid rows due to missing coordinates", report.skipped);
    }
    println!("✅ All files generated successfully!");
    println!("📁 Output directory: {}", report.output_dir.display());
    println!("📄 Locations count: {} (of {} rows)", report.location_count, report.total_rows);
    println!("🧾 Files created: {}", report.files.join(", "));
    println!("🔐 Source SHA-256: {}", report.source_sha256);
    Ok(())
}

fn check(source: SourceArgs) -> anyhow::Result<()> {
    let config = load_config(source, None)?;
    let use_case = GenerateUseCase::new(infra::source_for(&config.source));
    let (ingested, sha256) = use_case.ingest()?;

    println!("🔍 Source check passed");
    println!("   Rows: {}", ingested.total_rows);
    println!("   Valid locations: {}", ingested.locations.len());
    println!("   Skipped: {}", ingested.skipped);
    println!("   SHA-256: {}", sha256);
    Ok(())
}
