use anyhow::{Context, Result};
use clap::Parser;
use pdf_spaces_core::{
    export_spaces_csv_file, read_spaces, report_path, CsvExportConfig, Extraction, Space,
    DEFAULT_DPI,
};
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pdf-spaces")]
#[command(about = "Export the area and perimeter of PDF space annotations to CSV")]
#[command(version)]
pub struct Cli {
    /// PDF document to scan for spaces.
    #[arg(value_name = "FILE")]
    file: PathBuf,
    /// Print every space and the report location.
    #[arg(short, long)]
    verbose: bool,
    /// Resolution of the document's point coordinates.
    #[arg(long, default_value_t = DEFAULT_DPI)]
    dpi: f64,
    /// Report path. Defaults to the document path with a .csv extension.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

/// Settings for one extraction run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    pub verbose: bool,
    pub dpi: f64,
    pub output: PathBuf,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let output = cli.output.unwrap_or_else(|| report_path(&cli.file));
        Self { file: cli.file, verbose: cli.verbose, dpi: cli.dpi, output }
    }
}

pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = RunConfig::from(Cli::parse_from(args));
    init_tracing(config.verbose);
    run_export(&config)
}

/// Extract spaces from `config.file` and write the CSV report
pub fn run_export(config: &RunConfig) -> Result<()> {
    ensure_document_exists(&config.file)?;

    if !(config.dpi.is_finite() && config.dpi > 0.0) {
        anyhow::bail!("--dpi must be a positive number, got {}", config.dpi);
    }

    let extraction = read_spaces(&config.file, config.dpi)
        .with_context(|| format!("failed to extract spaces from {}", config.file.display()))?;

    report_diagnostics(&extraction);

    let stats = extraction.stats();
    tracing::info!(
        records = stats.records,
        points = stats.points,
        skipped = stats.skipped_groups,
        "extracted spaces from {}",
        config.file.display()
    );

    if config.verbose {
        for space in &extraction.spaces {
            print_space(space);
        }
    }

    export_spaces_csv_file(&config.output, &extraction.spaces, &CsvExportConfig::default())
        .with_context(|| format!("failed to write report to {}", config.output.display()))?;

    if config.verbose {
        println!("Data exported to {}", config.output.display());
    }

    Ok(())
}

fn report_diagnostics(extraction: &Extraction) {
    for diagnostic in &extraction.diagnostics {
        tracing::warn!(
            space = %diagnostic.title,
            "skipped coordinate group [{}]: {}",
            diagnostic.group.text,
            diagnostic.group.reason
        );
    }
}

fn print_space(space: &Space) {
    println!("Title: {}", space.title());
    println!("Path: {}", space.path_label());
    println!("Area: {:.2} square meters", space.area());
    println!("Perimeter: {:.2} meters", space.perimeter());
    println!();
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when run() is called twice in one process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

fn ensure_document_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("file does not exist: {}", path.display());
    }

    if !path.is_file() {
        anyhow::bail!("path is not a file: {}", path.display());
    }

    Ok(())
}
