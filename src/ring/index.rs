// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constant-time membership over a point collection.

use crate::geometry::{Direction, DirectionSet, Point};
use std::collections::HashSet;

/// A read-only set view over the points of one ring.
///
/// Built once per ring and dropped with it; it mirrors the ring's point set
/// exactly and is never mutated.
#[derive(Debug, Clone, Default)]
pub struct NeighborIndex {
    points: HashSet<Point>,
}

impl NeighborIndex {
    /// Index a collection of points. Duplicates collapse.
    pub fn new<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        Self {
            points: points.into_iter().copied().collect(),
        }
    }

    /// Whether `point` is present.
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The occupied neighbour directions of `point`, scanned clockwise from
    /// east and stopping once `limit` have been found.
    pub fn neighbors_of(&self, point: Point, limit: usize) -> DirectionSet {
        let mut found = DirectionSet::empty();
        for direction in Direction::all() {
            if found.len() >= limit {
                break;
            }
            if self.contains(point.step(direction)) {
                found.insert(direction);
            }
        }
        found
    }
}

impl FromIterator<Point> for NeighborIndex {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
