//! Road Accident Report CLI Application
//!
//! This is the command-line interface for the accident-report library.
//! It adds:
//! - Argument parsing and TOML configuration
//! - Logging setup
//! - Text report on stdout (and optionally in a file)
//! - JSON output of every chart specification

use accident_report::{derive, load_csv, render_charts, ReportGenerator, Section};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, OutputFormat, Overrides};

/// Road Accident Report - Exploratory analysis of accident records
#[derive(Parser, Debug)]
#[command(name = "accident-report")]
#[command(about = "Generate an exploratory report from a road accident CSV file", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the accident data file (CSV with a header row)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for report files (default: stdout only)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Output format for the report directory
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Field delimiter of the input file
    #[arg(short, long, value_name = "CHAR")]
    delimiter: Option<char>,

    /// Number of entries in "top" charts
    #[arg(long, value_name = "K")]
    top_k: Option<usize>,

    /// Only run these sections (can be repeated, e.g. --section severity)
    #[arg(long = "section", value_name = "SECTION")]
    sections: Vec<Section>,

    /// Print a note for every skipped analysis step
    #[arg(long)]
    skip_notices: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            output_dir: self.output.clone(),
            format: self.format,
            delimiter: self.delimiter,
            top_k: self.top_k,
            sections: self.sections.clone(),
            skip_notices: self.skip_notices,
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Road Accident Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using report library v{}", accident_report::VERSION);

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };
    let config = config.with_overrides(args.overrides());
    log::debug!("Effective configuration: {:?}", config);

    match config.input.file.clone() {
        Some(input) => generate(&config, input),
        None => {
            // No input - show help
            println!("Road Accident Report - No input specified");
            println!("\nQuick Start:");
            println!("  accident-report road-accident-data.csv");
            println!("  accident-report data.csv --section severity --top-k 5");
            println!("  accident-report data.csv --output report --format json");
            println!("\nWith a configuration file:");
            println!("  accident-report --config config.toml");
            println!("\nUse --help for more options");
            Ok(())
        }
    }
}

/// Load, derive, analyze and write the report
fn generate(config: &AppConfig, input: PathBuf) -> Result<()> {
    let dataset = load_csv(&input, &config.input.csv)
        .with_context(|| format!("Failed to load dataset: {:?}", input))?;
    let dataset = derive(dataset).context("Failed to derive columns")?;

    let generator = ReportGenerator::new(config.analysis.clone());
    let report = generator.run(&dataset);
    log::info!(
        "Report has {} artifacts ({} charts), {} steps skipped",
        report.artifacts.len(),
        report.charts().count(),
        report.skipped.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::txt::write_report(&report, &config.analysis, &mut out)?;

    if let Some(dir) = &config.output.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

        match config.output.format {
            OutputFormat::Txt => {
                let path = dir.join("report.txt");
                let mut file = io::BufWriter::new(fs::File::create(&path)?);
                report::txt::write_report(&report, &config.analysis, &mut file)?;
                file.flush()?;
                log::info!("Wrote report {:?}", path);
            }
            OutputFormat::Json => {
                let mut writer = report::json::JsonChartWriter::new(dir);
                let charts = render_charts(&report, &mut writer)?;
                log::info!("Wrote {} chart specifications to {:?}", charts, dir);
                report::json::write_report_json(&report, &dir.join("report.json"))?;
            }
        }
    }

    writeln!(out, "\nAnalysis complete. Please review the plots and outputs for insights.")?;
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
