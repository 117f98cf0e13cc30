//! Exhaustive O(n²) closest pair search.
//!
//! Used on its own for small inputs and as the leaf case of the recursive
//! solver. When several pairs share the minimal distance, the first one met in
//! iteration order is kept. Which pair that is depends on the order of the
//! input, so only the distance is comparable between solvers.

use crate::error::{Result, validate_points};
use crate::pair::CandidatePair;
use crate::point::{Point, distance};

/// Finds the closest pair by comparing every unordered pair once.
///
/// Non-finite coordinates are rejected, as with the default
/// [`SolverConfig`](crate::SolverConfig).
///
/// # Errors
///
/// Returns [`InvalidInput`](crate::InvalidInput) when `points` has fewer than
/// two elements or contains NaN or infinite coordinates.
pub fn brute_force(points: &[Point]) -> Result<CandidatePair> {
    validate_points(points, true)?;
    let indices: Vec<usize> = (0..points.len()).collect();
    Ok(brute_force_over(points, &indices))
}

/// Closest pair among `points[i]` for `i` in `indices`.
///
/// `indices` must hold at least two entries. Iterates in the order of
/// `indices`, keeping the first minimal pair.
pub(crate) fn brute_force_over(points: &[Point], indices: &[usize]) -> CandidatePair {
    debug_assert!(indices.len() >= 2, "brute force needs at least 2 points");

    let mut best = (indices[0], indices[1]);
    let mut min_distance = distance(&points[best.0], &points[best.1]);

    for (k, &i) in indices.iter().enumerate() {
        for &j in &indices[k + 1..] {
            let d = distance(&points[i], &points[j]);
            if d < min_distance {
                min_distance = d;
                best = (i, j);
            }
        }
    }

    CandidatePair::from_indices(points, best.0, best.1)
}
