//! Closest-pair algorithms under benchmark.
//!
//! Every algorithm takes a point slice and returns the smallest Euclidean
//! distance between two distinct entries, or
//! [`NO_PAIR_DISTANCE`](crate::constants::NO_PAIR_DISTANCE) for fewer than
//! two points. Duplicate points are distinct entries at distance zero.

mod brute_force;
mod brute_force_improved;
mod divide_and_conquer;
mod divide_and_conquer_improved;

pub use brute_force::brute_force;
pub use brute_force_improved::brute_force_improved;
pub use divide_and_conquer::divide_and_conquer;
pub use divide_and_conquer_improved::divide_and_conquer_improved;
