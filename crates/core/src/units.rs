//! Typographic point to metric conversion

/// Resolution assumed for point coordinates when none is configured
pub const DEFAULT_DPI: f64 = 72.0;

/// Millimeters per inch
const MM_PER_INCH: f64 = 25.4;

/// Convert a length in points to centimeters at the given resolution.
///
/// `dpi` must be non-zero. The same factor is applied to both axes, so
/// callers convert x and y independently with the same `dpi`.
pub fn points_to_cm(value: f64, dpi: f64) -> f64 {
    value * (MM_PER_INCH / dpi) / 10.0
}
