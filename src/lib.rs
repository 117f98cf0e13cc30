//! # Closest Pair - planar closest pair of points
//!
//! Finds two points of a 2D point set whose Euclidean distance is minimal, in
//! O(n log n) time using the classic divide-and-conquer algorithm.
//!
//! ## Features
//!
//! - **Divide and Conquer**: presorts by x and y once, recurses on index ranges
//! - **Brute Force**: O(n²) reference solver, also used as the recursion's leaf case
//! - **Witness Indices**: the result tells where both points sit in the input
//! - **Input Validation**: fewer than two points or non-finite coordinates are rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use closest_pair::prelude::*;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(5.0, 5.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(9.0, 0.5),
//! ];
//!
//! let pair = closest_pair(&points)?;
//! assert_eq!(pair.indices(), (0, 2));
//! assert!((pair.distance() - 2.0_f64.sqrt()).abs() < 1e-12);
//!
//! // The exhaustive solver agrees on the distance
//! assert_eq!(brute_force(&points)?.distance(), pair.distance());
//! # Ok::<(), ClosestPairError>(())
//! ```
//!
//! ## How It Works
//!
//! The points are ordered twice, by x and by y. Each recursive level splits
//! the x-order in half at a vertical line, solves both halves, then looks for
//! a closer pair crossing the line. Only points closer to the line than the
//! best distance so far can form such a pair, and in y order each of them has
//! to be compared with at most 7 successors.
//!
//! When several pairs share the minimal distance, the solvers return one of
//! them. Which one depends on iteration order, so the two solvers may return
//! different pairs with the same distance.

pub mod brute_force;
pub mod config;
pub mod divide_conquer;
pub mod error;
pub mod pair;
pub mod point;
pub mod prelude;


pub use brute_force::brute_force;
pub use config::SolverConfig;
pub use divide_conquer::{ClosestPairSolver, SolveStats};
pub use error::{ClosestPairError, InvalidInput, Result};
pub use pair::CandidatePair;
pub use point::{Point, distance};

/// Finds a closest pair of `points` with the default [`SolverConfig`].
///
/// # Errors
///
/// Returns [`InvalidInput`] when `points` has fewer than two elements or
/// contains NaN or infinite coordinates.
pub fn closest_pair(points: &[Point]) -> Result<CandidatePair> {
    ClosestPairSolver::default().solve(points)
}

/// Collects `points` and finds a closest pair among them.
///
/// Indices in the result refer to iteration order.
///
/// # Errors
///
/// See [`closest_pair`].
pub fn closest_pair_from<I, P>(points: I) -> Result<CandidatePair>
where
    I: IntoIterator<Item = P>,
    P: Into<Point>,
{
    let points: Vec<Point> = points.into_iter().map(Into::into).collect();
    closest_pair(&points)
}
