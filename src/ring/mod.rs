// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Discrete rings.
//!
//! The ring of radius r is the set of lattice points whose distance to the
//! origin rounds to r: `(r - 1/2)² <= x² + y² < (r + 1/2)²`.
//!
//! # Generation
//!
//! Points are produced by a column scan over `x` in `[-r, r]`. For each
//! column the admissible `|y|` range is computed directly from the annulus
//! bounds ([`bounds::AnnulusBounds::column`]), so generation costs O(r) and
//! never touches the empty interior of the disc. A column whose range reaches
//! the axis contributes `(x, 0)` once; every other `y` contributes both
//! `(x, y)` and `(x, -y)`.
//!
//! The resulting order (columns left to right, within a column `y = 0`
//! first, then `+y, -y` pairs outward) is a function of r alone, which keeps
//! everything computed from a ring reproducible.
//!
//! # Example
//!
//! ```
//! use ring_search::ring::Ring;
//! use ring_search::geometry::Point;
//!
//! let ring = Ring::generate(2).unwrap();
//! assert_eq!(ring.len(), 12);
//! assert!(ring.index().contains(Point::new(2, 1)));
//! assert!(!ring.index().contains(Point::new(1, 1)));
//! ```

pub mod bounds;
pub mod index;

pub use bounds::{AnnulusBounds, ColumnSpan};
pub use index::NeighborIndex;

use crate::error::RingError;
use crate::geometry::Point;

/// The points of one discrete ring, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    bounds: AnnulusBounds,
    points: Vec<Point>,
}

impl Ring {
    /// Generate the ring of radius `r`.
    ///
    /// # Errors
    ///
    /// Fails fast on a negative or unsupported radius rather than returning
    /// an empty ring.
    pub fn generate(r: i64) -> Result<Self, RingError> {
        let bounds = AnnulusBounds::for_radius(r)?;
        let extent = bounds.x_extent();
        let mut points = Vec::new();

        for x in -extent..=extent {
            let Some(ColumnSpan { ymin, ymax }) = bounds.column(x) else {
                continue;
            };
            if ymin == 0 {
                points.push(Point::new(x, 0));
            }
            for y in ymin.max(1)..=ymax {
                points.push(Point::new(x, y));
                points.push(Point::new(x, -y));
            }
        }

        debug_assert!(points.iter().all(|p| bounds.contains(p.norm_squared())));
        Ok(Self { bounds, points })
    }

    pub fn radius(&self) -> i64 {
        self.bounds.radius()
    }

    pub fn bounds(&self) -> &AnnulusBounds {
        &self.bounds
    }

    /// Points in generation order. No point appears twice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Build the membership index for this ring.
    pub fn index(&self) -> NeighborIndex {
        NeighborIndex::new(&self.points)
    }
}

impl<'a> IntoIterator for &'a Ring {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
