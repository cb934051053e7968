//! Space extraction from raw document bytes
//!
//! Documents are scanned as flat bytes for inline space markers of the form
//! `<</Type/Space/Title(...)/Path[...]/C[...]/CA ...>>`. No PDF object
//! structure is parsed; compressed or encrypted streams are invisible.

use crate::coordinates::{parse_path, SkippedGroup};
use crate::space::Space;
use regex::bytes::Regex;
use std::path::{Path, PathBuf};

/// Marker pattern. `.` matches any byte but `\n`; both captures are lazy,
/// so the path runs up to the first `]/C[` and keeps its inner groups.
const SPACE_MARKER_PATTERN: &str =
    r"(?-u)<</Type/Space/Title\((.*?)\)/Path\[(.*?)\]/C\[.*?\]/CA .*?>>";

/// Error types for space extraction
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// One matched marker, borrowed from the document bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Byte offset of the marker in the document
    pub offset: usize,
    /// Title field contents
    pub title: &'a [u8],
    /// Path field contents, inner groups still bracketed
    pub path: &'a [u8],
}

impl RawRecord<'_> {
    /// Title decoded as UTF-8, invalid sequences replaced
    pub fn title_lossy(&self) -> String {
        String::from_utf8_lossy(self.title).into_owned()
    }

    /// Path field decoded as UTF-8, invalid sequences replaced
    pub fn path_lossy(&self) -> String {
        String::from_utf8_lossy(self.path).into_owned()
    }
}

/// Something that can find space records in a document
pub trait RecordSource {
    /// Records in document order. An empty iterator means no spaces.
    fn records<'a>(&'a self, bytes: &'a [u8]) -> Box<dyn Iterator<Item = RawRecord<'a>> + 'a>;
}

/// Pattern-matching record source over raw bytes
#[derive(Debug, Clone)]
pub struct MarkerScanner {
    pattern: Regex,
}

impl MarkerScanner {
    /// Create a scanner for the standard space marker
    pub fn new() -> ExtractResult<Self> {
        Ok(Self { pattern: Regex::new(SPACE_MARKER_PATTERN)? })
    }
}

impl RecordSource for MarkerScanner {
    fn records<'a>(&'a self, bytes: &'a [u8]) -> Box<dyn Iterator<Item = RawRecord<'a>> + 'a> {
        Box::new(self.pattern.captures_iter(bytes).filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(RawRecord {
                offset: whole.start(),
                title: caps.get(1)?.as_bytes(),
                path: caps.get(2)?.as_bytes(),
            })
        }))
    }
}

/// A coordinate group dropped from a particular space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathDiagnostic {
    /// Title of the space the group belonged to
    pub title: String,
    pub group: SkippedGroup,
}

/// Statistics about an extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Markers matched in the document
    pub records: usize,
    /// Points kept across all spaces, closing points included
    pub points: usize,
    /// Coordinate groups dropped
    pub skipped_groups: usize,
}

/// Spaces found in a document, plus everything that was dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub spaces: Vec<Space>,
    pub diagnostics: Vec<PathDiagnostic>,
}

impl Extraction {
    /// Summary counts
    pub fn stats(&self) -> ExtractStats {
        ExtractStats {
            records: self.spaces.len(),
            points: self.spaces.iter().map(|s| s.path().len()).sum(),
            skipped_groups: self.diagnostics.len(),
        }
    }
}

/// Build spaces from every record `source` finds in `bytes`
pub fn extract_spaces<S>(source: &S, bytes: &[u8], dpi: f64) -> Extraction
where
    S: RecordSource + ?Sized,
{
    let mut extraction = Extraction::default();

    for record in source.records(bytes) {
        let title = record.title_lossy();
        let parsed = parse_path(&record.path_lossy(), dpi);

        tracing::debug!(
            offset = record.offset,
            title = %title,
            points = parsed.points.len(),
            "matched space marker"
        );

        extraction.diagnostics.extend(
            parsed
                .skipped
                .into_iter()
                .map(|group| PathDiagnostic { title: title.clone(), group }),
        );
        extraction.spaces.push(Space::new(title, parsed.points));
    }

    extraction
}

/// Read a document from disk and extract its spaces with the marker scanner
pub fn read_spaces(path: &Path, dpi: f64) -> ExtractResult<Extraction> {
    let bytes = std::fs::read(path)
        .map_err(|source| ExtractError::Read { path: path.to_path_buf(), source })?;

    let scanner = MarkerScanner::new()?;
    Ok(extract_spaces(&scanner, &bytes, dpi))
}
