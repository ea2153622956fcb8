// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mask catalogs.
//!
//! Catalogs only ever grow. Merging is set union, which is commutative and
//! idempotent: merging per-worker catalogs in any order, or merging the same
//! catalog twice, gives the same result as a single sequential run.

use crate::mask::Mask;
use crate::symmetry;
use std::collections::BTreeSet;

/// A set of distinct masks, iterated in ascending order of value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskCatalog {
    masks: BTreeSet<Mask>,
}

impl MaskCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mask. Returns true if it was not already present.
    pub fn insert(&mut self, mask: Mask) -> bool {
        self.masks.insert(mask)
    }

    pub fn contains(&self, mask: Mask) -> bool {
        self.masks.contains(&mask)
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Masks in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Mask> + '_ {
        self.masks.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Mask> {
        self.iter().collect()
    }

    /// Union `other` into this catalog, returning the masks that were new, ascending.
    pub fn merge(&mut self, other: &MaskCatalog) -> Vec<Mask> {
        other.iter().filter(|&mask| self.insert(mask)).collect()
    }

    /// One representative per orbit under the symmetries of the square.
    ///
    /// The representative is the largest mask of its orbit, see
    /// [`symmetry::canonical`].
    pub fn canonical_classes(&self) -> MaskCatalog {
        self.iter().map(symmetry::canonical).collect()
    }
}

impl FromIterator<Mask> for MaskCatalog {
    fn from_iter<I: IntoIterator<Item = Mask>>(iter: I) -> Self {
        Self {
            masks: iter.into_iter().collect(),
        }
    }
}

impl Extend<Mask> for MaskCatalog {
    fn extend<I: IntoIterator<Item = Mask>>(&mut self, iter: I) {
        self.masks.extend(iter);
    }
}

/// Masks newly added by a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDelta {
    pub configurations: Vec<Mask>,
    pub forbidden: Vec<Mask>,
}

impl CatalogDelta {
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty() && self.forbidden.is_empty()
    }
}

/// The all-configurations catalog and the optional forbidden catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogs {
    configurations: MaskCatalog,
    forbidden: Option<MaskCatalog>,
}

impl Catalogs {
    /// Empty catalogs; the forbidden catalog exists only if `record_forbidden`.
    pub fn new(record_forbidden: bool) -> Self {
        Self {
            configurations: MaskCatalog::new(),
            forbidden: record_forbidden.then(MaskCatalog::new),
        }
    }

    /// Every mask recorded so far.
    pub fn configurations(&self) -> &MaskCatalog {
        &self.configurations
    }

    /// Masks of points that broke the adjacent-pair rule, if tracked.
    pub fn forbidden(&self) -> Option<&MaskCatalog> {
        self.forbidden.as_ref()
    }

    pub fn record(&mut self, mask: Mask) -> bool {
        self.configurations.insert(mask)
    }

    /// Record a forbidden mask. A no-op when the forbidden catalog is disabled.
    pub fn record_forbidden(&mut self, mask: Mask) -> bool {
        self.forbidden
            .as_mut()
            .is_some_and(|forbidden| forbidden.insert(mask))
    }

    /// Union `other` into these catalogs.
    ///
    /// Forbidden masks from `other` are dropped if this side does not track them.
    pub fn merge(&mut self, other: &Catalogs) -> CatalogDelta {
        let configurations = self.configurations.merge(&other.configurations);
        let forbidden = match (self.forbidden.as_mut(), other.forbidden.as_ref()) {
            (Some(ours), Some(theirs)) => ours.merge(theirs),
            _ => Vec::new(),
        };
        CatalogDelta {
            configurations,
            forbidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(bits: &[u16]) -> MaskCatalog {
        bits.iter().copied().map(Mask::from_bits).collect()
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut c = MaskCatalog::new();
        assert!(c.insert(Mask::from_bits(50)));
        assert!(!c.insert(Mask::from_bits(50)));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let c = catalog(&[176, 26, 152, 50]);
        let bits: Vec<u16> = c.iter().map(Mask::bits).collect();
        assert_eq!(bits, vec![26, 50, 152, 176]);
    }

    #[test]
    fn test_merge_returns_new_masks() {
        let mut a = catalog(&[26, 50]);
        let b = catalog(&[50, 152, 176]);
        let added: Vec<u16> = a.merge(&b).into_iter().map(Mask::bits).collect();
        assert_eq!(added, vec![152, 176]);
        assert_eq!(a.len(), 4);
        assert!(a.merge(&b).is_empty());
    }

    #[test]
    fn test_merge_commutes() {
        let a = catalog(&[26, 28, 49]);
        let b = catalog(&[28, 56]);

        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_forbidden_disabled_is_noop() {
        let mut catalogs = Catalogs::new(false);
        assert!(!catalogs.record_forbidden(Mask::from_bits(25)));
        assert!(catalogs.forbidden().is_none());
    }

    #[test]
    fn test_catalogs_merge_delta() {
        let mut global = Catalogs::new(true);
        global.record(Mask::from_bits(26));

        let mut local = Catalogs::new(true);
        local.record(Mask::from_bits(26));
        local.record(Mask::from_bits(25));
        local.record_forbidden(Mask::from_bits(25));

        let delta = global.merge(&local);
        assert_eq!(delta.configurations, vec![Mask::from_bits(25)]);
        assert_eq!(delta.forbidden, vec![Mask::from_bits(25)]);
        assert!(global.merge(&local).is_empty());
    }

    #[test]
    fn test_canonical_classes_collapse_rotations() {
        // The four corners of ring 1 are rotations of each other.
        let c = catalog(&[26, 50, 152, 176]);
        assert_eq!(c.canonical_classes().len(), 1);
    }
}
