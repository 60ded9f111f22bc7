//! Point type shared by every algorithm.

use std::fmt;

/// Coordinate type of a [`Point`].
pub type Coord = i64;

/// A point in the integer plane.
///
/// Ordering is lexicographic on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

impl From<(Coord, Coord)> for Point {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Render a point sequence as `[(x, y), (x, y), ...]`.
#[must_use]
pub fn points_to_string(points: &[Point]) -> String {
    let inner: Vec<String> = points.iter().map(Point::to_string).collect();
    format!("[{}]", inner.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_point() {
        assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
    }

    #[test]
    fn points_to_string_formats() {
        let points = [Point::new(1, 2), Point::new(3, 4)];
        assert_eq!(points_to_string(&points), "[(1, 2), (3, 4)]");
    }

    #[test]
    fn points_to_string_empty() {
        assert_eq!(points_to_string(&[]), "[]");
    }

    #[test]
    fn ordering_is_x_then_y() {
        let mut points = vec![Point::new(2, 0), Point::new(1, 5), Point::new(1, 3)];
        points.sort();
        assert_eq!(
            points,
            vec![Point::new(1, 3), Point::new(1, 5), Point::new(2, 0)]
        );
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Point::from((7, 8)), Point::new(7, 8));
    }
}
