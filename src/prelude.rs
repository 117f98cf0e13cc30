//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used items from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use closest_pair::prelude::*;
//! ```

pub use crate::{
    CandidatePair, ClosestPairError, ClosestPairSolver, InvalidInput, Point, SolveStats,
    SolverConfig, brute_force, closest_pair, closest_pair_from, distance,
};
