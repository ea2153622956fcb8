// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice geometry primitives.
//!
//! - Point: integer lattice point
//! - Direction: one of the eight neighbour directions, in clockwise cyclic order
//! - DirectionSet: bitset of directions
//! - constants: direction and raster offset tables

pub mod constants;
pub mod direction;
pub mod direction_set;
pub mod point;

// Re-export for convenience
pub use constants::*;
pub use direction::Direction;
pub use direction_set::DirectionSet;
pub use point::Point;
