// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact annulus bounds.
//!
//! The ring of radius r is `(r - 1/2)² <= x² + y² < (r + 1/2)²`. Multiplying
//! through by 4 and using that `s = x² + y²` is an integer, this is
//! `lo <= s <= hi` with `lo = r² - r + 1` (0 when r = 0) and `hi = r² + r`.
//! Everything below works on those integers, so boundary points never depend
//! on floating-point rounding.

use crate::error::RingError;
use crate::geometry::constants::MAX_RADIUS;

/// Largest integer whose square does not exceed `n`.
///
/// `n` must be non-negative. The floating-point estimate is only a starting
/// point; the result is corrected to the exact floor.
pub fn isqrt(n: i64) -> i64 {
    debug_assert!(n >= 0, "isqrt of negative value {}", n);
    let mut s = (n as f64).sqrt() as i64;
    while s > 0 && s * s > n {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    s
}

/// Smallest integer whose square is at least `n`.
pub fn ceil_sqrt(n: i64) -> i64 {
    let s = isqrt(n);
    if s * s == n {
        s
    } else {
        s + 1
    }
}

/// Inclusive bounds on `x² + y²` for the ring of one radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnulusBounds {
    radius: i64,
    lo: i64,
    hi: i64,
}

/// The occupied `|y|` range of one column of the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub ymin: i64,
    pub ymax: i64,
}

impl AnnulusBounds {
    /// Bounds for radius `r`.
    ///
    /// # Errors
    ///
    /// [`RingError::NegativeRadius`] if `r < 0`, [`RingError::RadiusTooLarge`]
    /// if `r > MAX_RADIUS`.
    pub fn for_radius(r: i64) -> Result<Self, RingError> {
        if r < 0 {
            return Err(RingError::NegativeRadius { radius: r });
        }
        if r > MAX_RADIUS {
            return Err(RingError::RadiusTooLarge {
                radius: r,
                max: MAX_RADIUS,
            });
        }
        let lo = if r == 0 { 0 } else { r * r - r + 1 };
        Ok(Self {
            radius: r,
            lo,
            hi: r * r + r,
        })
    }

    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Smallest admissible `x² + y²`.
    pub fn lo(&self) -> i64 {
        self.lo
    }

    /// Largest admissible `x² + y²`.
    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// Membership predicate on the squared norm.
    pub fn contains(&self, norm_squared: i64) -> bool {
        self.lo <= norm_squared && norm_squared <= self.hi
    }

    /// Largest `|x|` that can appear in the ring, `⌊r + 1/2⌋`.
    pub fn x_extent(&self) -> i64 {
        self.radius
    }

    /// The `|y|` range of column `x`, or None if the column is empty.
    pub fn column(&self, x: i64) -> Option<ColumnSpan> {
        let x2 = x * x;
        if x2 > self.hi {
            return None;
        }
        let ymax = isqrt(self.hi - x2);
        let ymin = if x2 >= self.lo {
            0
        } else {
            ceil_sqrt(self.lo - x2)
        };
        (ymin <= ymax).then_some(ColumnSpan { ymin, ymax })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_perfect_squares() {
        for s in [0i64, 1, 2, 3, 10, 99, 1 << 20, (1 << 30) + 7] {
            assert_eq!(isqrt(s * s), s);
            if s > 0 {
                assert_eq!(isqrt(s * s - 1), s - 1);
                assert_eq!(isqrt(s * s + 1), s);
            }
        }
    }

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(4), 2);
        assert_eq!(ceil_sqrt(5), 3);
    }

    #[test]
    fn test_bounds_match_half_integer_radii() {
        // 4 * lo >= (2r - 1)² and 4 * (lo - 1) < (2r - 1)², likewise for hi.
        for r in 1..200i64 {
            let b = AnnulusBounds::for_radius(r).unwrap();
            let inner = (2 * r - 1) * (2 * r - 1);
            let outer = (2 * r + 1) * (2 * r + 1);
            assert!(4 * b.lo() >= inner && 4 * (b.lo() - 1) < inner);
            assert!(4 * b.hi() < outer && 4 * (b.hi() + 1) >= outer);
        }
    }

    #[test]
    fn test_radius_zero_is_clamped() {
        let b = AnnulusBounds::for_radius(0).unwrap();
        assert_eq!((b.lo(), b.hi()), (0, 0));
        assert_eq!(b.column(0), Some(ColumnSpan { ymin: 0, ymax: 0 }));
        assert_eq!(b.column(1), None);
    }

    #[test]
    fn test_column_spans_radius_two() {
        // lo = 3, hi = 6
        let b = AnnulusBounds::for_radius(2).unwrap();
        assert_eq!(b.column(0), Some(ColumnSpan { ymin: 2, ymax: 2 }));
        assert_eq!(b.column(1), Some(ColumnSpan { ymin: 2, ymax: 2 }));
        assert_eq!(b.column(2), Some(ColumnSpan { ymin: 0, ymax: 1 }));
        assert_eq!(b.column(3), None);
    }

    #[test]
    fn test_invalid_radii() {
        assert_eq!(
            AnnulusBounds::for_radius(-1),
            Err(RingError::NegativeRadius { radius: -1 })
        );
        assert_eq!(
            AnnulusBounds::for_radius(MAX_RADIUS + 1),
            Err(RingError::RadiusTooLarge {
                radius: MAX_RADIUS + 1,
                max: MAX_RADIUS
            })
        );
        assert!(AnnulusBounds::for_radius(MAX_RADIUS).is_ok());
    }
}
