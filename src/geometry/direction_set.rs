// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DirectionSet type for representing sets of neighbour directions as bitsets.
//!
//! A DirectionSet records which of the eight neighbours of a point are
//! occupied, where bit i represents direction i in the clockwise cyclic order.
//!
//! # Examples
//!
//! ```
//! use ring_search::geometry::{Direction, DirectionSet};
//!
//! let mut set = DirectionSet::empty();
//! set.insert(Direction::new(0)); // east
//! set.insert(Direction::new(2)); // north
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "|02|");
//! assert_eq!(set.adjacent_pair(), Some(false));
//! ```

use crate::geometry::{constants::NDIRECTIONS, Direction};
use std::fmt;

/// A set of directions represented as a bitset.
///
/// Bit i (counting from LSB) is set if direction i is in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// Create an empty direction set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a direction set from a raw bit value.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Insert a direction into the set.
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= 1 << direction.value();
    }

    /// Get the number of directions in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// For a set of exactly two directions, whether they are cyclically adjacent.
    ///
    /// Returns None unless the set has exactly two members.
    pub fn adjacent_pair(self) -> Option<bool> {
        let mut iter = self.iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(a), Some(b), None) => Some(a.is_cyclically_adjacent(b)),
            _ => None,
        }
    }

    /// Iterate over all directions in the set.
    ///
    /// Directions are yielded in ascending cyclic index (0, 1, 2, ...).
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        DirectionSetIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over directions in a DirectionSet.
struct DirectionSetIter {
    bits: u8,
    index: u8,
}

impl Iterator for DirectionSetIter {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NDIRECTIONS as u8 {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(Direction::new(idx));
            }
        }
        None
    }
}

impl fmt::Display for DirectionSet {
    /// Format a direction set as "|024|".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for direction in self.iter() {
            write!(f, "{}", direction.value())?;
        }
        write!(f, "|")
    }
}
