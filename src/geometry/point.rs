// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer lattice points.

use crate::geometry::Direction;
use std::fmt;

/// A point of the integer lattice.
///
/// Points are plain values: two points are the same point iff their
/// coordinates are equal. The derived ordering is lexicographic on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// The origin, centre of every ring.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a point.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate this point by an offset.
    pub const fn offset(self, (dx, dy): (i64, i64)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The 8-neighbour of this point in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        self.offset(direction.offset())
    }

    /// Squared Euclidean distance to the origin.
    pub fn norm_squared(self) -> i64 {
        self.x * self.x + self.y * self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_follows_direction_table() {
        let p = Point::new(3, -2);
        assert_eq!(p.step(Direction::new(0)), Point::new(4, -2));
        assert_eq!(p.step(Direction::new(2)), Point::new(3, -1));
        assert_eq!(p.step(Direction::new(5)), Point::new(2, -3));
    }

    #[test]
    fn test_norm_squared() {
        assert_eq!(Point::ORIGIN.norm_squared(), 0);
        assert_eq!(Point::new(3, -4).norm_squared(), 25);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Point::new(-1, 7)), "(-1, 7)");
    }
}
