//! Textbook divide and conquer with floating-point distances.

use crate::algorithms::brute_force::brute_force;
use crate::constants::{BRUTE_FORCE_CUTOFF, NO_PAIR_DISTANCE};
use crate::distance::distance;
use crate::point::Point;

/// Closest-pair distance by recursive halving on x.
///
/// The strip around each split line is re-sorted by y at every level,
/// giving `O(n log² n)`.
#[must_use]
pub fn divide_and_conquer(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return NO_PAIR_DISTANCE;
    }

    let mut sorted_x = points.to_vec();
    sorted_x.sort_unstable_by_key(|p| p.x);

    closest_in(&sorted_x)
}

/// `points` must be sorted by x.
fn closest_in(points: &[Point]) -> f64 {
    if points.len() <= BRUTE_FORCE_CUTOFF {
        return brute_force(points);
    }

    let mid = points.len() / 2;
    let mid_x = points[mid].x;
    let (left, right) = points.split_at(mid);

    let delta = closest_in(left).min(closest_in(right));
    delta.min(closest_crossing(points, mid_x, delta))
}

/// Smallest distance below `delta` between points on opposite sides of
/// `mid_x`, or `delta` if there is none.
#[allow(clippy::cast_precision_loss)]
fn closest_crossing(points: &[Point], mid_x: i64, delta: f64) -> f64 {
    let mut strip: Vec<Point> = points
        .iter()
        .filter(|p| (p.x.abs_diff(mid_x) as f64) < delta)
        .copied()
        .collect();
    strip.sort_unstable_by_key(|p| p.y);

    let mut min_distance = delta;
    for (i, p1) in strip.iter().enumerate() {
        for p2 in &strip[i + 1..] {
            if (p2.y.abs_diff(p1.y) as f64) >= min_distance {
                break;
            }
            min_distance = min_distance.min(distance(p1, p2));
        }
    }

    min_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_finds_pair_across_line() {
        let points = [Point::new(9, 0), Point::new(11, 1), Point::new(30, 0)];
        let d = closest_crossing(&points, 10, 10.0);
        assert!((d - 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn crossing_keeps_delta_when_strip_is_empty() {
        let points = [Point::new(0, 0), Point::new(50, 0)];
        assert!((closest_crossing(&points, 25, 3.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn base_case_uses_brute_force() {
        let points = [Point::new(0, 0), Point::new(1, 0), Point::new(5, 0)];
        assert!((divide_and_conquer(&points) - 1.0).abs() < f64::EPSILON);
    }
}
