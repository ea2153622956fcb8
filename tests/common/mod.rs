// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use ring_search::geometry::Point;
use std::collections::HashSet;

/// Exact membership: `(2r - 1)² <= 4(x² + y²) < (2r + 1)²`, with the lower
/// bound clamped to 0 for r = 0.
pub fn in_annulus(r: i64, p: Point) -> bool {
    let four_s = 4 * (p.x * p.x + p.y * p.y);
    let inner = if r == 0 { 0 } else { (2 * r - 1) * (2 * r - 1) };
    let outer = (2 * r + 1) * (2 * r + 1);
    inner <= four_s && four_s < outer
}

/// Reference ring by scanning the whole `[-r-1, r+1]²` square.
pub fn brute_force_ring(r: i64) -> HashSet<Point> {
    let n = r + 1;
    let mut points = HashSet::new();
    for x in -n..=n {
        for y in -n..=n {
            let p = Point::new(x, y);
            if in_annulus(r, p) {
                points.insert(p);
            }
        }
    }
    points
}

pub fn point_set(points: &[Point]) -> HashSet<Point> {
    points.iter().copied().collect()
}
