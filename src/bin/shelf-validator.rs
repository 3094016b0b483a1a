//! # Shelf Validator
//!
//! Command-line tool for checking shelf and page documents before they are
//! saved, and for previewing which shelves a page would publish right now.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use curator_core::composition::published_shelves;
use curator_core::config::{ConfigManager, CuratorConfig};
use curator_core::models::{PageConfig, ShelfConfig};
use curator_core::validation::{validate_page, ShelfValidator, ValidationReport};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "shelf-validator")]
#[command(about = "Validate shelf and page configuration documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file supplying limit bounds
    /// (default: `CURATOR_CONFIG`, then config/curator.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a shelf document (one object or an array of shelves)
    Shelf { path: PathBuf },

    /// Validate a page document
    Page { path: PathBuf },

    /// List the shelves a page publishes at the current time
    Publish {
        /// Page document
        page: PathBuf,
        /// Array of shelf documents referenced by the page
        shelves: PathBuf,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

#[derive(Serialize)]
struct ReportLine<'a> {
    subject: &'a str,
    field: &'a str,
    message: String,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let _subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .try_init();

    match run(&cli) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Validation failed: {:#}", e);
            process::exit(2);
        }
    }
}

/// Returns whether every checked document is valid
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let validator = ShelfValidator::new(config.limits);

    match &cli.command {
        Commands::Shelf { path } => {
            let shelves = read_json::<OneOrMany<ShelfConfig>>(path)?.into_vec();
            let reports: Vec<_> = shelves
                .iter()
                .map(|shelf| (format!("shelf:{}", shelf.id), validator.validate(shelf)))
                .collect();
            print_reports(cli.format, &reports)
        }
        Commands::Page { path } => {
            let page: PageConfig = read_json(path)?;
            let reports = vec![(format!("page:{}", page.id), validate_page(&page))];
            print_reports(cli.format, &reports)
        }
        Commands::Publish { page, shelves } => {
            let page: PageConfig = read_json(page)?;
            let shelves: Vec<ShelfConfig> = read_json(shelves)?;
            let visible = published_shelves(&page, &shelves, chrono::Utc::now());

            match cli.format {
                OutputFormat::Json => {
                    let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
                    println!("{}", serde_json::to_string_pretty(&ids)?);
                }
                OutputFormat::Text => {
                    println!("Page {} publishes {} shelves", page.id, visible.len());
                    for (position, shelf) in visible.iter().enumerate() {
                        println!("  {position}. {} ({})", shelf.id, shelf.title);
                    }
                }
            }
            Ok(true)
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(true)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<CuratorConfig> {
    let manager = match path {
        Some(path) => ConfigManager::load_from_path(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigManager::load().context("loading layered configuration")?,
    };
    debug!(source = ?manager.source_file(), "Using limit bounds {:?}", manager.config().limits);
    Ok(manager.config().clone())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

fn print_reports(format: OutputFormat, reports: &[(String, ValidationReport)]) -> Result<bool> {
    let all_valid = reports.iter().all(|(_, report)| report.is_valid());

    match format {
        OutputFormat::Json => {
            let lines: Vec<ReportLine<'_>> = reports
                .iter()
                .flat_map(|(subject, report)| {
                    report.errors().iter().map(move |error| ReportLine {
                        subject: subject.as_str(),
                        field: error.field,
                        message: error.to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&lines)?);
        }
        OutputFormat::Text => {
            for (subject, report) in reports {
                if report.is_valid() {
                    println!("✅ {subject}");
                    continue;
                }
                println!("❌ {subject}");
                for error in report.errors() {
                    println!("   {}: {error}", error.field);
                }
            }
        }
    }

    Ok(all_valid)
}
