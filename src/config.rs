//! Solver configuration.

/// Smallest sub-range the recursion may hand to brute force.
///
/// A split of 3 points would leave a single point on one side.
pub const MIN_LEAF_SIZE: usize = 3;

/// Options for [`ClosestPairSolver`](crate::ClosestPairSolver).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    leaf_size: usize,
    validate_finite: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            leaf_size: MIN_LEAF_SIZE,
            validate_finite: true,
        }
    }
}

impl SolverConfig {
    /// Default configuration: leaves of at most 3 points, finite check on
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest sub-range solved by brute force.
    ///
    /// Values below [`MIN_LEAF_SIZE`] are raised to it.
    #[must_use]
    pub fn with_leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size.max(MIN_LEAF_SIZE);
        self
    }

    /// Enables or disables rejection of NaN and infinite coordinates
    #[must_use]
    pub fn with_validate_finite(mut self, validate_finite: bool) -> Self {
        self.validate_finite = validate_finite;
        self
    }

    /// Largest sub-range solved by brute force
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    /// Whether non-finite coordinates are rejected
    pub fn validate_finite(&self) -> bool {
        self.validate_finite
    }
}
