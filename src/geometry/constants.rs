// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants for lattice neighbourhoods.
//!
//! Two orderings of the 3×3 neighbourhood are used throughout the crate:
//!
//! - the **cyclic** order of the eight neighbour directions, clockwise starting
//!   at east, used by the connectivity invariant;
//! - the **raster** order of all nine cells, row-major with the `y = +1` row on
//!   top, used to encode masks.

/// Number of neighbour directions in the 8-neighbourhood.
pub const NDIRECTIONS: usize = 8;

/// Number of cells in a 3×3 neighbourhood, centre included.
pub const NCELLS: usize = 9;

/// Raster index of the centre cell.
pub const CENTER_CELL: usize = 4;

/// Neighbour offsets in cyclic order: index 0 is east, indices advance clockwise.
pub const DIRECTION_OFFSETS: [(i64, i64); NDIRECTIONS] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Cell offsets in raster order, top-left to bottom-right.
pub const RASTER_OFFSETS: [(i64, i64); NCELLS] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Largest radius accepted by the ring generator.
///
/// Keeps `r² + r` and every coordinate square well inside `i64`.
pub const MAX_RADIUS: i64 = 1 << 30;

/// Number of neighbours after which a point is compliant without further inspection.
pub const SATURATING_NEIGHBORS: usize = 3;
