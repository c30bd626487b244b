//! CLI that extracts text from a PDF and reports it as a JSON record.

mod input;
mod output;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{Level, debug, error, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pdftext_core::{ExtractionResult, PdfTextConfig, extract_text};

/// Extract plain text from a PDF and print the result as JSON
#[derive(Parser)]
#[command(name = "pdftext")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PDF file to read (default: standard input)
    pdf_path: Option<PathBuf>,

    /// Enable verbose output on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum number of characters for the text to count as extracted
    #[arg(long)]
    min_text_length: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            let result = ExtractionResult::failure(format!("Script error: {e:#}"));
            if let Err(write_err) = output::write_result(&mut io::stdout().lock(), &result) {
                error!("{:#}", write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;

    let data = input::read_input(cli.pdf_path.as_deref())?;
    debug!("Read {} bytes of input", data.len());

    let result = if data.is_empty() {
        warn!("No PDF data received");
        ExtractionResult::no_data()
    } else {
        extract_text(&data, &config.extraction)
    };

    output::write_result(&mut io::stdout().lock(), &result)
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<PdfTextConfig> {
    let mut config = match &cli.config {
        Some(path) => PdfTextConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                debug!("Using config file {}", path.display());
                PdfTextConfig::from_file(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?
            } else {
                PdfTextConfig::default()
            }
        }
    };

    if let Some(min_text_length) = cli.min_text_length {
        config.extraction.min_text_length = min_text_length;
    }

    Ok(config)
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pdftext")
        .join("config.json")
}
