//! Planar ring geometry
//!
//! Area and perimeter of closed point sequences in metric page space.
//! Rings are expected to be simple; self-intersecting rings get the plain
//! shoelace value.

/// A point in centimeters
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Shoelace sum over the ring, halved.
///
/// Positive for counter-clockwise winding, negative for clockwise. The
/// segment from the last point back to the first is always included, so
/// open and closed forms of the same ring agree.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Unsigned area enclosed by the ring
pub fn ring_area(points: &[Point]) -> f64 {
    signed_area(points).abs()
}

/// Length of the ring boundary, including the closing segment
pub fn ring_perimeter(points: &[Point]) -> f64 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };

    let open: f64 = points.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
    open + last.distance_to(first)
}
