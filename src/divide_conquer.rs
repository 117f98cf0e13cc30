//! Divide-and-conquer closest pair search in O(n log n).
//!
//! The input slice is never copied or reordered. Two index permutations, one
//! ordered by x and one by y, are built once and each recursive level reads a
//! contiguous sub-range of the x-view together with the matching y-ordered
//! subset. Since every split halves its range exactly, the recursion depth is
//! `ceil(log2(n))` and cannot exhaust the stack.
//!
//! Per level:
//! - split the x-view at `n / 2`, with `x_mid` the x of the last left point
//! - partition the y-view into left and right, preserving y order
//! - recurse on both halves, keep the smaller result (left on ties)
//! - scan the strip `|x - x_mid| < delta` in y order, comparing each point
//!   with at most [`STRIP_NEIGHBORS`] successors

use std::cmp::Ordering;

use tracing::{debug, instrument, trace};

use crate::brute_force::brute_force_over;
use crate::config::SolverConfig;
use crate::error::{Result, validate_points};
use crate::pair::CandidatePair;
use crate::point::{Point, distance};

/// Forward neighbors checked per strip point.
///
/// A `delta` by `2 delta` box holds at most 8 points that are pairwise at
/// least `delta` apart, so a closer split pair is always within 7 positions
/// of each other in y order.
pub const STRIP_NEIGHBORS: usize = 7;

/// Counters gathered during one solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Sub-ranges handed to brute force
    pub leaf_calls: usize,
    /// Sub-ranges that were split and merged
    pub split_levels: usize,
    /// Deepest recursion level reached, the root being 0
    pub max_depth: usize,
    /// Sum of strip lengths over all split levels
    pub strip_points: usize,
    /// Distance evaluations done while scanning strips
    pub strip_comparisons: usize,
}

/// Divide-and-conquer closest pair solver.
///
/// ```rust
/// use closest_pair::prelude::*;
///
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(0.0, 4.0)];
/// let solver = ClosestPairSolver::new(SolverConfig::default());
/// let pair = solver.solve(&points).unwrap();
/// assert_eq!(pair.distance(), 3.0);
/// assert_eq!(pair.indices(), (0, 1));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosestPairSolver {
    config: SolverConfig,
}

impl ClosestPairSolver {
    /// Creates a solver with the given configuration
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds a closest pair of `points`.
    ///
    /// When several pairs share the minimal distance, any one of them may be
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`](crate::InvalidInput) when `points` has fewer
    /// than two elements, or when finite validation is enabled and a
    /// coordinate is NaN or infinite.
    pub fn solve(&self, points: &[Point]) -> Result<CandidatePair> {
        self.solve_with_stats(points).map(|(pair, _)| pair)
    }

    /// Same as [`solve`](Self::solve), also returning recursion counters.
    ///
    /// # Errors
    ///
    /// See [`solve`](Self::solve).
    #[instrument(skip_all, fields(n = points.len()))]
    pub fn solve_with_stats(&self, points: &[Point]) -> Result<(CandidatePair, SolveStats)> {
        validate_points(points, self.config.validate_finite())?;
        debug!(leaf_size = self.config.leaf_size(), "solving closest pair");

        let views = SortedViews::new(points);
        let mut search = Search {
            points,
            x_rank: &views.x_rank,
            leaf_size: self.config.leaf_size(),
            stats: SolveStats::default(),
        };
        let best = search.closest_in(&views.by_x, &views.by_y, 0);

        debug!(
            distance = best.distance(),
            leaf_calls = search.stats.leaf_calls,
            max_depth = search.stats.max_depth,
            "closest pair found"
        );
        Ok((best, search.stats))
    }

    /// Exhaustive search honoring this solver's validation setting.
    ///
    /// # Errors
    ///
    /// See [`solve`](Self::solve).
    pub fn brute_force(&self, points: &[Point]) -> Result<CandidatePair> {
        validate_points(points, self.config.validate_finite())?;
        let indices: Vec<usize> = (0..points.len()).collect();
        Ok(brute_force_over(points, &indices))
    }
}

/// Index permutations of one point set, ordered by x and by y.
///
/// Ties are broken by the other coordinate, then by input index, so both
/// orders are total and reproducible.
#[derive(Debug)]
pub(crate) struct SortedViews {
    pub(crate) by_x: Vec<usize>,
    pub(crate) by_y: Vec<usize>,
    /// `x_rank[i]` is the position of point `i` in `by_x`
    pub(crate) x_rank: Vec<usize>,
}

impl SortedViews {
    pub(crate) fn new(points: &[Point]) -> Self {
        let mut by_x: Vec<usize> = (0..points.len()).collect();
        let mut by_y = by_x.clone();

        by_x.sort_unstable_by(|&a, &b| cmp_by_x(points, a, b));
        by_y.sort_unstable_by(|&a, &b| cmp_by_y(points, a, b));

        let mut x_rank = vec![0; points.len()];
        for (rank, &i) in by_x.iter().enumerate() {
            x_rank[i] = rank;
        }

        Self { by_x, by_y, x_rank }
    }
}

fn cmp_by_x(points: &[Point], a: usize, b: usize) -> Ordering {
    points[a]
        .x
        .total_cmp(&points[b].x)
        .then_with(|| points[a].y.total_cmp(&points[b].y))
        .then_with(|| a.cmp(&b))
}

fn cmp_by_y(points: &[Point], a: usize, b: usize) -> Ordering {
    points[a]
        .y
        .total_cmp(&points[b].y)
        .then_with(|| points[a].x.total_cmp(&points[b].x))
        .then_with(|| a.cmp(&b))
}

/// Splits a y-ordered index list into the points ranked before `cut` in the
/// x-view and the rest, keeping y order on both sides.
///
/// Membership comes from the x-rank rather than from comparing against the
/// median coordinate, so points sharing the median x land on the same side
/// as in the x-split and both partitions hold the same multisets.
pub(crate) fn split_by_rank(
    by_y: &[usize],
    x_rank: &[usize],
    cut: usize,
) -> (Vec<usize>, Vec<usize>) {
    let mut left = Vec::with_capacity(by_y.len() / 2 + 1);
    let mut right = Vec::with_capacity(by_y.len() / 2 + 1);
    for &i in by_y {
        if x_rank[i] < cut {
            left.push(i);
        } else {
            right.push(i);
        }
    }
    (left, right)
}

struct Search<'a> {
    points: &'a [Point],
    x_rank: &'a [usize],
    leaf_size: usize,
    stats: SolveStats,
}

impl Search<'_> {
    /// Closest pair among the points of `by_x`; `by_y` holds the same
    /// indices in y order.
    fn closest_in(&mut self, by_x: &[usize], by_y: &[usize], depth: usize) -> CandidatePair {
        debug_assert_eq!(by_x.len(), by_y.len(), "views must cover the same points");
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let n = by_x.len();
        if n <= self.leaf_size {
            self.stats.leaf_calls += 1;
            return brute_force_over(self.points, by_x);
        }

        let (left_x, right_x) = by_x.split_at(n / 2);
        let x_mid = self.points[left_x[left_x.len() - 1]].x;

        let (left_y, right_y) = split_by_rank(by_y, self.x_rank, self.x_rank[right_x[0]]);
        debug_assert_eq!(left_y.len(), left_x.len(), "y-partition disagrees with x-split");

        let left = self.closest_in(left_x, &left_y, depth + 1);
        let right = self.closest_in(right_x, &right_y, depth + 1);
        let mut best = if left.distance() <= right.distance() {
            left
        } else {
            right
        };

        let strip: Vec<usize> = by_y
            .iter()
            .copied()
            .filter(|&i| (self.points[i].x - x_mid).abs() < best.distance())
            .collect();

        trace!(
            depth,
            n,
            x_mid,
            delta = best.distance(),
            strip = strip.len(),
            "merging halves"
        );

        for (s, &i) in strip.iter().enumerate() {
            for &j in strip.iter().skip(s + 1).take(STRIP_NEIGHBORS) {
                self.stats.strip_comparisons += 1;
                if distance(&self.points[i], &self.points[j]) < best.distance() {
                    best = CandidatePair::from_indices(self.points, i, j);
                }
            }
        }

        self.stats.split_levels += 1;
        self.stats.strip_points += strip.len();
        best
    }
}
