//! Planar point type and the Euclidean distance between two points.

/// A point in the plane with `f64` coordinates.
///
/// Points carry no identity beyond their coordinates; two points with equal
/// coordinates are interchangeable and their distance is exactly `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` when neither coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`, see [`distance`]
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance(self, other)
    }

    /// Squared Euclidean distance to `other`
    pub fn squared_distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

/// Euclidean distance between `a` and `b`.
///
/// Computed with [`f64::hypot`], so the intermediate square cannot overflow
/// for coordinates near `f64::MAX`. The result is symmetric and never negative.
pub fn distance(a: &Point, b: &Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
