//! Named polygon annotations

use crate::geometry::{ring_area, ring_perimeter, Point};

/// A titled polygon pulled out of a document
///
/// The title is kept verbatim from the source, escape sequences included.
/// The path is in centimeters and closed whenever it holds more than one
/// distinct point.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Space {
    title: String,
    path: Vec<Point>,
}

impl Space {
    /// Create a new space
    pub fn new(title: impl Into<String>, path: Vec<Point>) -> Self {
        Self { title: title.into(), path }
    }

    /// Title as written in the document
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Ring vertices in centimeters
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Enclosed area in square centimeters
    pub fn area(&self) -> f64 {
        ring_area(&self.path)
    }

    /// Boundary length in centimeters
    pub fn perimeter(&self) -> f64 {
        ring_perimeter(&self.path)
    }

    /// Path formatted as `[(x, y) (x, y) ...]`
    pub fn path_label(&self) -> String {
        let points = self.path.iter().map(Point::to_string).collect::<Vec<_>>().join(" ");
        format!("[{}]", points)
    }
}
