// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Regression baseline: every radius in 1..=120 satisfies the invariant, and
//! the mask catalogs over that range are fixed.

use ring_search::geometry::Point;
use ring_search::mask::Mask;
use ring_search::{
    CatalogScope, Catalogs, InvariantChecker, MaskCatalog, Ring, Survey, SurveyConfig,
};

/// Two-neighbour masks observed over radii 1..=120.
const TWO_NEIGHBOR_MASKS: [u16; 16] = [
    26, 28, 49, 50, 56, 82, 84, 112, 145, 146, 148, 152, 176, 273, 274, 280,
];

fn bits(catalog: &MaskCatalog) -> Vec<u16> {
    catalog.iter().map(Mask::bits).collect()
}

#[test]
fn test_baseline_radii_pass() {
    for r in 1..=120 {
        let ring = Ring::generate(r).unwrap();
        let index = ring.index();
        let verdict = InvariantChecker::check(&ring, &index);
        assert!(verdict.is_pass(), "radius {} failed: {:?}", r, verdict);
    }
}

#[test]
fn test_baseline_catalogs() {
    let report = Survey::new(1, 120, SurveyConfig::default())
        .unwrap()
        .run()
        .unwrap();

    assert!(report.all_passed());
    assert_eq!(report.failures().count(), 0);
    assert_eq!(bits(report.catalogs.configurations()), TWO_NEIGHBOR_MASKS);
    assert!(report.catalogs.forbidden().unwrap().is_empty());

    // Four shapes up to symmetry: straight, right angle, diagonal, and knight-like bend.
    assert_eq!(
        bits(&report.catalogs.configurations().canonical_classes()),
        vec![146, 176, 273, 280]
    );
}

#[test]
fn test_baseline_every_point_catalog() {
    let config = SurveyConfig::default().with_scope(CatalogScope::EveryPoint);
    let report = Survey::new(1, 120, config).unwrap().run().unwrap();
    assert_eq!(report.catalogs.configurations().len(), 52);
    for mask in TWO_NEIGHBOR_MASKS {
        assert!(report.catalogs.configurations().contains(Mask::from_bits(mask)));
    }
    assert!(report.catalogs.configurations().iter().all(Mask::has_center));
}

#[test]
fn test_radius_one() {
    let ring = Ring::generate(1).unwrap();
    assert_eq!(ring.len(), 8);

    let index = ring.index();
    let mut catalogs = Catalogs::new(true);
    let verdict =
        InvariantChecker::default().check_and_catalogue(&ring, &index, &mut catalogs);
    assert!(verdict.is_pass());
    // Only the corners have exactly two neighbours.
    assert_eq!(bits(catalogs.configurations()), vec![26, 50, 152, 176]);
}

#[test]
fn test_radius_two() {
    let ring = Ring::generate(2).unwrap();
    let index = ring.index();
    assert_eq!(ring.len(), 12);
    assert!(!index.contains(Point::new(1, 1)));

    let mut catalogs = Catalogs::new(true);
    let verdict =
        InvariantChecker::default().check_and_catalogue(&ring, &index, &mut catalogs);
    assert!(verdict.is_pass());
    assert_eq!(
        bits(catalogs.configurations()),
        vec![28, 49, 56, 82, 112, 145, 146, 148, 274, 280]
    );
    assert!(catalogs.forbidden().unwrap().is_empty());
}

#[test]
fn test_catalogued_masks_render() {
    let mask = Mask::from_bits(280);
    assert_eq!(mask.glyphs(), "...\n#O.\n..#");
    assert_eq!(format!("{}", Mask::from_bits(146)), ".#.\n.O.\n.#.");
}
