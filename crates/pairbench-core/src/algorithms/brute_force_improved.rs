//! Quadratic scan over unordered pairs using integer pseudo-distances.

use crate::constants::NO_PAIR_DISTANCE;
use crate::distance::{pseudo_distance, pseudo_to_distance, PseudoDistance};
use crate::point::Point;

/// Closest-pair distance by comparing every unordered pair once.
///
/// Compares squared integer distances, stops as soon as two coincident points
/// are found, and takes a single `sqrt` at the end. This is the control
/// function the benchmark checks every other algorithm against.
#[must_use]
pub fn brute_force_improved(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return NO_PAIR_DISTANCE;
    }
    pseudo_to_distance(min_pseudo_distance(points))
}

/// Smallest pseudo-distance among `points`, `PseudoDistance::MAX` if there is
/// no pair.
pub(crate) fn min_pseudo_distance(points: &[Point]) -> PseudoDistance {
    let mut min_distance = PseudoDistance::MAX;

    for (i, p1) in points.iter().enumerate() {
        for p2 in &points[i + 1..] {
            let distance = pseudo_distance(p1, p2);
            if distance == 0 {
                return 0;
            }
            min_distance = min_distance.min(distance);
        }
    }

    min_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_pseudo_distance_small() {
        let points = [Point::new(0, 0), Point::new(2, 2), Point::new(5, 5)];
        assert_eq!(min_pseudo_distance(&points), 8);
    }

    #[test]
    fn min_pseudo_distance_no_pair() {
        assert_eq!(min_pseudo_distance(&[Point::new(1, 1)]), PseudoDistance::MAX);
        assert_eq!(min_pseudo_distance(&[]), PseudoDistance::MAX);
    }

    #[test]
    fn early_exit_on_coincident_points() {
        let points = [Point::new(3, 3), Point::new(3, 3), Point::new(100, 100)];
        assert_eq!(min_pseudo_distance(&points), 0);
        assert!(brute_force_improved(&points).abs() < f64::EPSILON);
    }
}
