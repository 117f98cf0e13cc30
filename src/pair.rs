//! The closest pair result.

use crate::point::{Point, distance};

/// Two points of the input and the distance between them.
///
/// The pair remembers where each point sits in the caller's slice.
/// Indices are stored in ascending order, so `indices().0 < indices().1`.
/// The distance is computed from the stored coordinates when the pair is
/// created and cannot be set independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidatePair {
    first: Point,
    second: Point,
    first_index: usize,
    second_index: usize,
    distance: f64,
}

impl CandidatePair {
    /// Builds the pair formed by `points[i]` and `points[j]`.
    ///
    /// `i` and `j` must be distinct valid indices into `points`.
    pub(crate) fn from_indices(points: &[Point], i: usize, j: usize) -> Self {
        debug_assert_ne!(i, j, "a pair needs two distinct input elements");
        let (first_index, second_index) = if i < j { (i, j) } else { (j, i) };
        let first = points[first_index];
        let second = points[second_index];
        Self {
            first,
            second,
            first_index,
            second_index,
            distance: distance(&first, &second),
        }
    }

    /// Point with the lower input index
    pub fn first(&self) -> Point {
        self.first
    }

    /// Point with the higher input index
    pub fn second(&self) -> Point {
        self.second
    }

    /// Both points, lower input index first
    pub fn points(&self) -> (Point, Point) {
        (self.first, self.second)
    }

    /// Positions of the two points in the input slice
    pub fn indices(&self) -> (usize, usize) {
        (self.first_index, self.second_index)
    }

    /// Euclidean distance between the two points
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Squared distance, exact for integer coordinates below 2^26
    pub fn squared_distance(&self) -> f64 {
        self.first.squared_distance_to(&self.second)
    }

    /// Whether the pair consists of `a` and `b`, in either order
    pub fn is_pair_of(&self, a: Point, b: Point) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}
