//! PDF Spaces Core Library
//!
//! Extraction of named polygon "spaces" from raw PDF bytes, metric
//! conversion, area and perimeter computation, and CSV reporting.

pub mod coordinates;
pub mod csv_export;
pub mod extract;
pub mod geometry;
pub mod space;
pub mod units;

pub use coordinates::{parse_path, ParsedPath, SkipReason, SkippedGroup};
pub use csv_export::{
    export_spaces_csv, export_spaces_csv_file, report_path, CsvExportConfig, CsvExportError,
    CsvExportResult, SPACE_HEADERS,
};
pub use extract::{
    extract_spaces, read_spaces, ExtractError, ExtractResult, ExtractStats, Extraction,
    MarkerScanner, PathDiagnostic, RawRecord, RecordSource,
};
pub use geometry::{ring_area, ring_perimeter, signed_area, Point};
pub use space::Space;
pub use units::{points_to_cm, DEFAULT_DPI};
