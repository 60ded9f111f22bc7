//! Distance metrics.
//!
//! [`distance`] is the exact Euclidean distance in floating point.
//! [`pseudo_distance`] is the squared distance in integer arithmetic: it
//! preserves ordering, needs no `sqrt`, and cannot overflow because the
//! per-axis differences are taken with `abs_diff` and squared in `u128`.

use crate::point::Point;

/// Squared Euclidean distance between two points.
pub type PseudoDistance = u128;

/// Euclidean distance between `p1` and `p2`.
///
/// Exact (bit-identical to `pseudo_to_distance(pseudo_distance(p1, p2))`)
/// as long as `dx² + dy²` stays below 2^53.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    let dx = p1.x.abs_diff(p2.x) as f64;
    let dy = p1.y.abs_diff(p2.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Squared distance between `p1` and `p2`.
///
/// Saturates at `u128::MAX` when both axes span nearly the full `i64` range.
#[inline]
#[must_use]
pub fn pseudo_distance(p1: &Point, p2: &Point) -> PseudoDistance {
    let dx = PseudoDistance::from(p1.x.abs_diff(p2.x));
    let dy = PseudoDistance::from(p1.y.abs_diff(p2.y));
    (dx * dx).saturating_add(dy * dy)
}

/// Convert a pseudo-distance back into a Euclidean distance.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pseudo_to_distance(pseudo: PseudoDistance) -> f64 {
    (pseudo as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Coord;

    #[test]
    fn distance_three_four_five() {
        let d = distance(&Point::new(0, 0), &Point::new(3, 4));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(-7, 12);
        let b = Point::new(5, -3);
        assert_eq!(distance(&a, &b).to_bits(), distance(&b, &a).to_bits());
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point::new(42, -42);
        assert!(distance(&p, &p).abs() < f64::EPSILON);
        assert_eq!(pseudo_distance(&p, &p), 0);
    }

    #[test]
    fn pseudo_distance_is_squared() {
        assert_eq!(pseudo_distance(&Point::new(1, 1), &Point::new(4, 5)), 25);
    }

    #[test]
    fn pseudo_distance_handles_negative_coordinates() {
        assert_eq!(pseudo_distance(&Point::new(-2, -2), &Point::new(1, 2)), 25);
    }

    #[test]
    fn pseudo_distance_extreme_coordinates_do_not_overflow() {
        let a = Point::new(Coord::MIN, Coord::MIN);
        let b = Point::new(Coord::MAX, Coord::MAX);
        assert_eq!(pseudo_distance(&a, &b), PseudoDistance::MAX);

        let c = Point::new(Coord::MIN, 0);
        let d = Point::new(Coord::MAX, 0);
        let span = PseudoDistance::from(u64::MAX);
        assert_eq!(pseudo_distance(&c, &d), span * span);
    }

    #[test]
    fn metrics_agree_for_small_coordinates() {
        let a = Point::new(10, 93);
        let b = Point::new(71, 2);
        assert_eq!(
            distance(&a, &b).to_bits(),
            pseudo_to_distance(pseudo_distance(&a, &b)).to_bits()
        );
    }
}
