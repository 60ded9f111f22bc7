//! Benchmark input construction.

use tracing::{debug, enabled, Level};

use pairbench_core::constants::MAX_SIZE;
use pairbench_core::{points_to_string, Coord, Point};
use pairbench_harness::IntGenerator;

/// Inputs up to this size are logged in full at debug level.
const LOGGED_INPUT_SIZE: u64 = 16;

/// `n` points with both coordinates drawn from `generator`, x before y.
pub fn random_points(n: u64, generator: &mut IntGenerator<Coord>) -> Vec<Point> {
    let mut points = Vec::with_capacity(usize::try_from(n.min(MAX_SIZE)).unwrap_or(0));
    for _ in 0..n {
        let x = generator.generate();
        let y = generator.generate();
        points.push(Point::new(x, y));
    }
    if n <= LOGGED_INPUT_SIZE && enabled!(Level::DEBUG) {
        debug!(n, points = %points_to_string(&points), "generated input");
    }
    points
}
