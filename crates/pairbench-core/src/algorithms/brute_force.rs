//! Naive quadratic scan with exact distances.

use crate::constants::NO_PAIR_DISTANCE;
use crate::distance::distance;
use crate::point::Point;

/// Closest-pair distance by comparing every ordered pair `(i, j)`, `i != j`.
///
/// Each unordered pair is evaluated twice and every comparison pays for a
/// `sqrt`; this is the baseline the other algorithms are measured against.
///
/// # Example
/// ```
/// use pairbench_core::{brute_force, Point};
///
/// let points = [Point::new(0, 0), Point::new(6, 8), Point::new(1, 1)];
/// assert!((brute_force(&points) - 2f64.sqrt()).abs() < 1e-12);
/// ```
#[must_use]
pub fn brute_force(points: &[Point]) -> f64 {
    let mut min_distance = NO_PAIR_DISTANCE;

    for (i, p1) in points.iter().enumerate() {
        for (j, p2) in points.iter().enumerate() {
            if i != j {
                min_distance = min_distance.min(distance(p1, p2));
            }
        }
    }

    min_distance
}
