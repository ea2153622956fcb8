// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Local connectivity invariant.
//!
//! A point set satisfies the invariant when every point has at least two
//! 8-neighbours in the set and, whenever it has exactly two, those two are
//! not consecutive in the clockwise cyclic order of directions (indices
//! differing by 1 or 7 modulo 8).
//!
//! # Algorithm
//!
//! For each point, in the order given:
//! 1. Scan directions 0..8 clockwise from east, stopping once 3 neighbours
//!    are found (a third neighbour makes the point compliant)
//! 2. Fewer than 2 neighbours → FAIL
//! 3. Exactly 2 at indices a < b with (b - a) mod 8 in {1, 7} → FAIL
//! 4. Otherwise the point passes
//!
//! The first failing point ends the check. A failing verdict is an ordinary
//! result, not an error.
//!
//! # Cataloguing
//!
//! [`InvariantChecker::check_and_catalogue`] additionally records 3×3 masks.
//! A point's mask is recorded *before* its own verdict is decided, so the
//! point that triggers a FAIL still contributes to the catalogs; masks of
//! points with an adjacent neighbour pair also go to the forbidden catalog.

pub mod violation;

pub use violation::{Violation, ViolationKind};

use crate::config::CatalogScope;
use crate::geometry::constants::SATURATING_NEIGHBORS;
use crate::geometry::{DirectionSet, Point};
use crate::mask::{Catalogs, Mask};
use crate::ring::{NeighborIndex, Ring};

/// Outcome of checking a point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(Violation),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(violation) => Some(violation),
        }
    }
}

/// Classify one point from its (possibly truncated) neighbour scan.
///
/// `neighbors` must come from a clockwise scan that stops no earlier than
/// the third neighbour, so that a two-member set really means two neighbours.
pub fn classify(point: Point, neighbors: DirectionSet) -> Option<Violation> {
    if neighbors.len() < 2 {
        return Some(Violation::TooFewNeighbors {
            point,
            found: neighbors,
        });
    }
    match neighbors.adjacent_pair() {
        Some(true) => {
            let mut iter = neighbors.iter();
            let (first, second) = (iter.next()?, iter.next()?);
            Some(Violation::AdjacentPair {
                point,
                first,
                second,
            })
        }
        _ => None,
    }
}

/// Checks the connectivity invariant, optionally cataloguing masks.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantChecker {
    scope: CatalogScope,
}

impl InvariantChecker {
    pub fn new(scope: CatalogScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> CatalogScope {
        self.scope
    }

    /// Check a ring without touching any catalog.
    pub fn check(ring: &Ring, index: &NeighborIndex) -> Verdict {
        Self::check_points(ring.points(), index)
    }

    /// Check `points` against the membership in `index`.
    ///
    /// `points` need not cover all of `index`; only the listed points are
    /// classified.
    pub fn check_points(points: &[Point], index: &NeighborIndex) -> Verdict {
        for &point in points {
            let neighbors = index.neighbors_of(point, SATURATING_NEIGHBORS);
            if let Some(violation) = classify(point, neighbors) {
                return Verdict::Fail(violation);
            }
        }
        Verdict::Pass
    }

    /// Check a ring, recording masks into `catalogs` as points are visited.
    pub fn check_and_catalogue(
        &self,
        ring: &Ring,
        index: &NeighborIndex,
        catalogs: &mut Catalogs,
    ) -> Verdict {
        self.check_points_and_catalogue(ring.points(), index, catalogs)
    }

    /// As [`Self::check_and_catalogue`], over an arbitrary point slice.
    pub fn check_points_and_catalogue(
        &self,
        points: &[Point],
        index: &NeighborIndex,
        catalogs: &mut Catalogs,
    ) -> Verdict {
        for &point in points {
            let neighbors = index.neighbors_of(point, SATURATING_NEIGHBORS);
            let mask = match self.scope {
                CatalogScope::EveryPoint => Some(Mask::around(point, index)),
                CatalogScope::TwoNeighbors if neighbors.len() == 2 => {
                    Some(Mask::around(point, index))
                }
                CatalogScope::TwoNeighbors => None,
            };
            if let Some(mask) = mask {
                catalogs.record(mask);
            }

            if let Some(violation) = classify(point, neighbors) {
                if let (Violation::AdjacentPair { .. }, Some(mask)) = (violation, mask) {
                    catalogs.record_forbidden(mask);
                }
                return Verdict::Fail(violation);
            }
        }
        Verdict::Pass
    }
}
