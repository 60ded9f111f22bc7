//! # pairbench-core
//!
//! Core library for the PairBench closest-pair benchmark.
//! Defines points, the two distance metrics, the four closest-pair
//! algorithms under test, and the registry that describes them.

pub mod algorithms;
pub mod constants;
pub mod distance;
pub mod error;
pub mod point;
pub mod registry;

// Re-exports
pub use algorithms::{
    brute_force, brute_force_improved, divide_and_conquer, divide_and_conquer_improved,
};
pub use constants::{exit_codes, BRUTE_FORCE_MAX_SIZE, CONTROL_ALGORITHM, NO_PAIR_DISTANCE};
pub use distance::{distance, pseudo_distance, pseudo_to_distance, PseudoDistance};
pub use error::CoreError;
pub use point::{points_to_string, Coord, Point};
pub use registry::{AlgorithmRegistry, AlgorithmSpec, ClosestPairFn};

/// Compute the closest-pair distance of `points` with the fastest algorithm.
///
/// Returns [`NO_PAIR_DISTANCE`] when fewer than two points are given.
///
/// # Example
/// ```
/// use pairbench_core::{closest_pair, Point};
///
/// let points = [Point::new(0, 0), Point::new(3, 4), Point::new(10, 10)];
/// assert_eq!(closest_pair(&points), 5.0);
/// ```
#[must_use]
pub fn closest_pair(points: &[Point]) -> f64 {
    divide_and_conquer_improved(points)
}
