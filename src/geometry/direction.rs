// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direction type for the eight lattice neighbours.
//!
//! Directions are numbered clockwise starting at east, so that two directions
//! are *cyclically adjacent* when their indices differ by one modulo 8
//! (including the wraparound pair 7 and 0).

use crate::geometry::constants::{DIRECTION_OFFSETS, NDIRECTIONS};

/// A neighbour direction in the range 0..NDIRECTIONS.
///
/// This is a newtype wrapper to keep cyclic indices apart from coordinates
/// and raster positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Direction(u8);

impl Direction {
    /// Create a new direction, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NDIRECTIONS`.
    pub fn new(value: u8) -> Self {
        assert!(
            (value as usize) < NDIRECTIONS,
            "Direction out of range: {}",
            value
        );
        Self(value)
    }

    /// All eight directions in clockwise order, starting at east.
    pub fn all() -> impl Iterator<Item = Direction> {
        (0..NDIRECTIONS as u8).map(Self)
    }

    /// Get the underlying cyclic index.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the direction as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The lattice offset `(dx, dy)` of this direction.
    pub fn offset(self) -> (i64, i64) {
        DIRECTION_OFFSETS[self.as_usize()]
    }

    /// Clockwise distance from `self` to `other`, in `0..NDIRECTIONS`.
    pub fn clockwise_distance(self, other: Direction) -> u8 {
        (other.0 + NDIRECTIONS as u8 - self.0) % NDIRECTIONS as u8
    }

    /// Whether the two directions are consecutive in the cyclic order.
    pub fn is_cyclically_adjacent(self, other: Direction) -> bool {
        matches!(self.clockwise_distance(other), 1 | 7)
    }
}
