// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! 3×3 neighbourhood masks.
//!
//! A [`Mask`] encodes which cells of the 3×3 block centred on a point are
//! occupied. Bit i corresponds to cell i in raster order (row-major, the
//! `y = +1` row on top, left to right):
//!
//! ```text
//!  0 1 2
//!  3 4 5
//!  6 7 8
//! ```
//!
//! Bit 4 is the centre. Masks are only computed around ring points, so the
//! centre bit is always set for catalogued masks.

pub mod catalog;

pub use catalog::{CatalogDelta, Catalogs, MaskCatalog};

use crate::geometry::constants::{CENTER_CELL, NCELLS, RASTER_OFFSETS};
use crate::geometry::Point;
use crate::ring::NeighborIndex;
use std::fmt;

/// Glyph for an occupied cell.
pub const OCCUPIED_GLYPH: char = '#';
/// Glyph for an empty cell.
pub const EMPTY_GLYPH: char = '.';
/// Glyph for the centre cell in [`Mask::glyphs`].
pub const CENTER_GLYPH: char = 'O';

const MASK_BITS: u16 = (1 << NCELLS) - 1;

/// A 9-bit 3×3 occupancy mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Mask(u16);

impl Mask {
    /// Mask with only the centre occupied.
    pub const CENTER: Mask = Mask(1 << CENTER_CELL);

    /// Create a mask from raw bits; bits above the ninth are discarded.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & MASK_BITS)
    }

    /// The mask of the 3×3 block centred on `point`.
    pub fn around(point: Point, index: &NeighborIndex) -> Self {
        let mut bits = 0;
        for (cell, &offset) in RASTER_OFFSETS.iter().enumerate() {
            if index.contains(point.offset(offset)) {
                bits |= 1 << cell;
            }
        }
        Self(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// Whether raster cell `cell` (0..9) is occupied.
    pub fn is_occupied(self, cell: usize) -> bool {
        cell < NCELLS && (self.0 >> cell) & 1 != 0
    }

    pub fn has_center(self) -> bool {
        self.is_occupied(CENTER_CELL)
    }

    /// Three-line glyph grid with the centre drawn as [`CENTER_GLYPH`].
    pub fn glyphs(self) -> String {
        self.render(Some(CENTER_GLYPH))
    }

    /// Three-line glyph grid treating the centre like any other cell.
    pub fn plain_glyphs(self) -> String {
        self.render(None)
    }

    fn render(self, center: Option<char>) -> String {
        let mut out = String::with_capacity(NCELLS + 2);
        for cell in 0..NCELLS {
            if cell > 0 && cell % 3 == 0 {
                out.push('\n');
            }
            let glyph = match center {
                Some(glyph) if cell == CENTER_CELL => glyph,
                _ if self.is_occupied(cell) => OCCUPIED_GLYPH,
                _ => EMPTY_GLYPH,
            };
            out.push(glyph);
        }
        out
    }
}

/// Raster cell of a 3×3 offset.
pub(crate) fn raster_cell((dx, dy): (i64, i64)) -> usize {
    ((1 - dy) * 3 + (dx + 1)) as usize
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyphs())
    }
}
