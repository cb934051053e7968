//! CSV export for extracted spaces
//!
//! Writes one row per space with its area and perimeter, ready for
//! spreadsheets and quantity take-off tools.

use crate::space::Space;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column headers of the space report
pub const SPACE_HEADERS: [&str; 3] = ["Title", "Area (m2)", "Perimeter (m)"];

/// Error types for CSV export
#[derive(Debug, thiserror::Error)]
pub enum CsvExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

pub type CsvExportResult<T> = Result<T, CsvExportError>;

/// Configuration for CSV export
#[derive(Debug, Clone)]
pub struct CsvExportConfig {
    /// Include column headers in the output
    pub include_headers: bool,

    /// CSV delimiter character
    pub delimiter: u8,

    /// Decimal places for area and perimeter
    pub precision: usize,
}

impl Default for CsvExportConfig {
    fn default() -> Self {
        Self {
            include_headers: true,
            delimiter: b',',
            precision: 2,
        }
    }
}

/// Export spaces to CSV format
///
/// CSV columns:
/// - Title: Space title exactly as found in the document
/// - Area (m2): Enclosed area
/// - Perimeter (m): Boundary length
pub fn export_spaces_csv<W: Write>(
    writer: W,
    spaces: &[Space],
    config: &CsvExportConfig,
) -> CsvExportResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.include_headers)
        .from_writer(writer);

    if config.include_headers {
        csv_writer.write_record(SPACE_HEADERS)?;
    }

    for space in spaces {
        csv_writer.write_record(&[
            space.title().to_string(),
            format_number(space.area(), config.precision),
            format_number(space.perimeter(), config.precision),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Export spaces to a CSV file, creating or truncating it
pub fn export_spaces_csv_file(
    path: &Path,
    spaces: &[Space],
    config: &CsvExportConfig,
) -> CsvExportResult<()> {
    let file = std::fs::File::create(path)?;
    export_spaces_csv(std::io::BufWriter::new(file), spaces, config)
}

/// Report location for a document: same directory, `.csv` extension
pub fn report_path(document: &Path) -> PathBuf {
    let stem = document.file_stem().unwrap_or(document.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".csv");
    document.with_file_name(name)
}

/// Format a number with a fixed number of decimals
fn format_number(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}
