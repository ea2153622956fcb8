// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetries of the square.
//!
//! Every ring is invariant under the dihedral group D4: the four rotations
//! about the origin and the four reflections in the axes and diagonals. The
//! same group acts on 3×3 masks by permuting raster cells, which lets a mask
//! catalog be reduced to one representative per orbit.

use crate::geometry::constants::RASTER_OFFSETS;
use crate::geometry::Point;
use crate::mask::{raster_cell, Mask};
use std::cmp::Ordering;

/// A linear isometry of the lattice, `(x, y) -> (a x + b y, c x + d y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareSymmetry([[i64; 2]; 2]);

/// The dihedral group D4: rotations first, then reflections.
pub const DIHEDRAL_GROUP_4: [SquareSymmetry; 8] = [
    SquareSymmetry([[1, 0], [0, 1]]),   // identity
    SquareSymmetry([[0, -1], [1, 0]]),  // rotate 90°
    SquareSymmetry([[-1, 0], [0, -1]]), // rotate 180°
    SquareSymmetry([[0, 1], [-1, 0]]),  // rotate 270°
    SquareSymmetry([[1, 0], [0, -1]]),  // reflect in x axis
    SquareSymmetry([[-1, 0], [0, 1]]),  // reflect in y axis
    SquareSymmetry([[0, 1], [1, 0]]),   // reflect in y = x
    SquareSymmetry([[0, -1], [-1, 0]]), // reflect in y = -x
];

impl SquareSymmetry {
    fn apply_offset(&self, (x, y): (i64, i64)) -> (i64, i64) {
        let [[a, b], [c, d]] = self.0;
        (a * x + b * y, c * x + d * y)
    }

    /// Image of a point.
    pub fn apply_point(&self, p: Point) -> Point {
        self.apply_offset((p.x, p.y)).into()
    }

    /// Image of a mask, moving each occupied cell to the image of its offset.
    pub fn apply_mask(&self, mask: Mask) -> Mask {
        let mut bits = 0u16;
        for (cell, &offset) in RASTER_OFFSETS.iter().enumerate() {
            if mask.is_occupied(cell) {
                bits |= 1 << raster_cell(self.apply_offset(offset));
            }
        }
        Mask::from_bits(bits)
    }
}

/// Result of symmetry checking for a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryType {
    /// Mask is the unique maximum of its orbit.
    Canonical,
    /// Mask is the maximum and is fixed by some non-identity symmetry.
    Equivocal,
    /// Some image of the mask is larger.
    NonCanonical,
}

/// The largest mask in the orbit of `mask`.
pub fn canonical(mask: Mask) -> Mask {
    DIHEDRAL_GROUP_4
        .iter()
        .map(|g| g.apply_mask(mask))
        .max()
        .unwrap_or(mask)
}

/// Classify `mask` against its orbit under D4.
///
/// Algorithm:
/// 1. Apply all 8 symmetries
/// 2. Track the maximal image and how many symmetries reach it
/// 3. Compare input with maximum:
///    - If input != max → NonCanonical
///    - If more than one symmetry reaches max → Equivocal
///    - Otherwise → Canonical
pub fn check_symmetry(mask: Mask) -> SymmetryType {
    let mut max_image = mask;
    let mut max_count = 0;

    for g in DIHEDRAL_GROUP_4.iter() {
        let image = g.apply_mask(mask);
        match image.cmp(&max_image) {
            Ordering::Greater => {
                max_image = image;
                max_count = 1;
            }
            Ordering::Equal => max_count += 1,
            Ordering::Less => {}
        }
    }

    if mask != max_image {
        return SymmetryType::NonCanonical;
    }
    if max_count > 1 {
        return SymmetryType::Equivocal;
    }
    SymmetryType::Canonical
}
