//! Coordinate list parsing
//!
//! Turns the raw `[x1 y1][x2 y2]...` text of a space's path field into a
//! closed ring of metric points. Malformed groups are dropped one at a time
//! and reported back to the caller instead of being printed here.

use crate::geometry::Point;
use crate::units::points_to_cm;

/// Separator between consecutive coordinate groups
const GROUP_SEPARATOR: &str = "][";

/// Why a coordinate group was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The group did not split into exactly two whitespace-separated tokens
    WrongTokenCount(usize),
    /// One of the two tokens is not a number
    InvalidNumber,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::WrongTokenCount(count) => {
                write!(f, "expected 2 coordinates, found {}", count)
            }
            SkipReason::InvalidNumber => write!(f, "failed to convert coordinates"),
        }
    }
}

/// A coordinate group that did not make it into the ring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedGroup {
    /// Raw group text, without its brackets
    pub text: String,
    pub reason: SkipReason,
}

/// Result of parsing one path field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPath {
    /// Points in input order, closed when non-empty
    pub points: Vec<Point>,
    /// Groups dropped along the way, in input order
    pub skipped: Vec<SkippedGroup>,
}

/// Parse a bracketed coordinate list into a closed ring.
///
/// One leading `[` and one trailing `]` are stripped, the rest is split on
/// `][`, and every group holding exactly two numbers becomes a point scaled
/// by [`points_to_cm`] at `dpi`. A ring whose first and last points differ
/// gets a copy of the first point appended; an already closed ring is left
/// as is. Empty input yields an empty ring.
pub fn parse_path(text: &str, dpi: f64) -> ParsedPath {
    let mut parsed = ParsedPath::default();

    let inner = text.strip_prefix('[').unwrap_or(text);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    for group in inner.split(GROUP_SEPARATOR) {
        match parse_group(group) {
            Ok(Some((x, y))) => {
                parsed.points.push(Point::new(points_to_cm(x, dpi), points_to_cm(y, dpi)));
            }
            Ok(None) => {}
            Err(reason) => parsed.skipped.push(SkippedGroup { text: group.to_string(), reason }),
        }
    }

    close_ring(&mut parsed.points);
    parsed
}

/// Parse a single `x y` group. Blank groups are `Ok(None)`.
fn parse_group(group: &str) -> Result<Option<(f64, f64)>, SkipReason> {
    let tokens: Vec<&str> = group.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(None),
        [x, y] => {
            let x = x.parse::<f64>().map_err(|_| SkipReason::InvalidNumber)?;
            let y = y.parse::<f64>().map_err(|_| SkipReason::InvalidNumber)?;
            Ok(Some((x, y)))
        }
        other => Err(SkipReason::WrongTokenCount(other.len())),
    }
}

/// Append the first point when the ring is open
fn close_ring(points: &mut Vec<Point>) {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return;
    };
    if first != last {
        points.push(first);
    }
}
