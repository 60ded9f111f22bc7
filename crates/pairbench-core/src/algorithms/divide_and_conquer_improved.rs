//! Divide and conquer with a single presort and integer pseudo-distances.

use crate::algorithms::brute_force_improved::min_pseudo_distance;
use crate::constants::{BRUTE_FORCE_CUTOFF, NO_PAIR_DISTANCE};
use crate::distance::{pseudo_distance, pseudo_to_distance, PseudoDistance};
use crate::point::Point;

/// Closest-pair distance in `O(n log n)`.
///
/// Points are sorted once by `(x, y)` and once by y. The y-ordered list holds
/// ranks into the x-ordered one, so each half receives exactly the points of
/// its own index range even when many points share the split coordinate.
#[must_use]
pub fn divide_and_conquer_improved(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return NO_PAIR_DISTANCE;
    }

    let mut sorted_x = points.to_vec();
    sorted_x.sort_unstable();

    let mut sorted_y: Vec<usize> = (0..sorted_x.len()).collect();
    sorted_y.sort_unstable_by_key(|&rank| sorted_x[rank].y);

    pseudo_to_distance(closest_in(&sorted_x, &sorted_y, 0, sorted_x.len()))
}

/// Closest pseudo-distance within `sorted_x[low..high]`; `sorted_y` holds the
/// ranks of exactly that range, ordered by y.
fn closest_in(sorted_x: &[Point], sorted_y: &[usize], low: usize, high: usize) -> PseudoDistance {
    if high - low <= BRUTE_FORCE_CUTOFF {
        return min_pseudo_distance(&sorted_x[low..high]);
    }

    let mid = low + (high - low) / 2;
    let mid_x = sorted_x[mid].x;

    let (left_y, right_y): (Vec<usize>, Vec<usize>) =
        sorted_y.iter().copied().partition(|&rank| rank < mid);

    let delta = closest_in(sorted_x, &left_y, low, mid)
        .min(closest_in(sorted_x, &right_y, mid, high));
    if delta == 0 {
        return 0;
    }

    delta.min(closest_crossing(sorted_x, sorted_y, mid_x, delta))
}

/// Scan the y-ordered strip of points whose squared x-distance to `mid_x` is
/// below `delta`.
fn closest_crossing(
    sorted_x: &[Point],
    sorted_y: &[usize],
    mid_x: i64,
    delta: PseudoDistance,
) -> PseudoDistance {
    let strip: Vec<Point> = sorted_y
        .iter()
        .map(|&rank| sorted_x[rank])
        .filter(|p| {
            let dx = PseudoDistance::from(p.x.abs_diff(mid_x));
            dx * dx < delta
        })
        .collect();

    let mut min_distance = delta;
    for (i, p1) in strip.iter().enumerate() {
        for p2 in &strip[i + 1..] {
            let dy = PseudoDistance::from(p2.y.abs_diff(p1.y));
            if dy * dy >= min_distance {
                break;
            }
            min_distance = min_distance.min(pseudo_distance(p1, p2));
        }
    }

    min_distance
}
