// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ways a ring point can break the connectivity invariant.

use crate::geometry::{Direction, DirectionSet, Point};
use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// The rule a violation broke, without the offending point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum ViolationKind {
    TooFewNeighbors,
    AdjacentPair,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::TooFewNeighbors => write!(f, "too few neighbours"),
            ViolationKind::AdjacentPair => write!(f, "adjacent neighbour pair"),
        }
    }
}

/// The first point found to break the invariant, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Point has fewer than two 8-neighbours in the ring.
    TooFewNeighbors { point: Point, found: DirectionSet },

    /// Point has exactly two neighbours and they are consecutive in the
    /// clockwise order (a corner-touch filler rather than a path vertex).
    AdjacentPair {
        point: Point,
        first: Direction,
        second: Direction,
    },
}

impl Violation {
    /// The offending point.
    pub fn point(&self) -> Point {
        match *self {
            Violation::TooFewNeighbors { point, .. } | Violation::AdjacentPair { point, .. } => {
                point
            }
        }
    }

    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::TooFewNeighbors { .. } => ViolationKind::TooFewNeighbors,
            Violation::AdjacentPair { .. } => ViolationKind::AdjacentPair,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooFewNeighbors { point, found } => {
                write!(
                    f,
                    "Point {} has {} neighbour(s) {}, needs at least 2",
                    point,
                    found.len(),
                    found
                )
            }
            Violation::AdjacentPair {
                point,
                first,
                second,
            } => {
                write!(
                    f,
                    "Point {} has only neighbours {} and {}, which are cyclically adjacent",
                    point,
                    first.value(),
                    second.value()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_kinds() {
        let a = Violation::TooFewNeighbors {
            point: Point::ORIGIN,
            found: DirectionSet::empty(),
        };
        let b = Violation::AdjacentPair {
            point: Point::new(1, 0),
            first: Direction::new(3),
            second: Direction::new(4),
        };
        assert_eq!(ViolationKind::COUNT, 2);
        assert_eq!(a.kind(), ViolationKind::TooFewNeighbors);
        assert_eq!(b.kind(), ViolationKind::AdjacentPair);
        assert_eq!(ViolationKind::iter().count(), ViolationKind::COUNT);
        assert_eq!(b.kind().to_string(), "adjacent neighbour pair");
        assert_eq!(b.point(), Point::new(1, 0));
    }

    #[test]
    fn test_display() {
        let v = Violation::AdjacentPair {
            point: Point::new(1, 0),
            first: Direction::new(3),
            second: Direction::new(4),
        };
        assert_eq!(
            v.to_string(),
            "Point (1, 0) has only neighbours 3 and 4, which are cyclically adjacent"
        );
        let v = Violation::TooFewNeighbors {
            point: Point::new(5, 5),
            found: DirectionSet::from_bits(0b10),
        };
        assert_eq!(
            v.to_string(),
            "Point (5, 5) has 1 neighbour(s) |1|, needs at least 2"
        );
    }
}
