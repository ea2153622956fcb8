// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalogs depend only on which radii were checked, never on the order or
//! on how the work was split.

use proptest::prelude::*;
use ring_search::survey::survey_radii;
use ring_search::{CatalogScope, Catalogs, Survey, SurveyConfig};

fn every_point() -> SurveyConfig {
    SurveyConfig::default().with_scope(CatalogScope::EveryPoint)
}

#[test]
fn test_reversed_order_same_catalogs() {
    let config = every_point();
    let forward = survey_radii(1..=80, &config).unwrap();
    let backward = survey_radii((1..=80).rev(), &config).unwrap();
    assert_eq!(forward.catalogs, backward.catalogs);
    assert_eq!(forward.statistics, backward.statistics);
}

#[test]
fn test_parallel_same_report() {
    let sequential = Survey::new(1, 120, every_point()).unwrap().run().unwrap();
    for workers in [1, 2, 5, 16] {
        let parallel = Survey::new(1, 120, every_point().with_workers(workers))
            .unwrap()
            .run_parallel()
            .unwrap();
        assert_eq!(parallel, sequential, "{} workers", workers);
    }
}

#[test]
fn test_merging_partial_runs_twice_is_harmless() {
    let config = every_point();
    let low = survey_radii(1..=60, &config).unwrap();
    let high = survey_radii(61..=120, &config).unwrap();
    let whole = survey_radii(1..=120, &config).unwrap();

    let mut merged = Catalogs::new(true);
    merged.merge(&high.catalogs);
    merged.merge(&low.catalogs);
    merged.merge(&high.catalogs);
    assert_eq!(merged, whole.catalogs);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_any_order_same_catalogs(radii in proptest::collection::vec(1i64..150, 1..40)) {
        let config = every_point();
        let given = survey_radii(radii.clone(), &config).unwrap();
        let mut ascending = radii;
        ascending.sort_unstable();
        let sorted = survey_radii(ascending, &config).unwrap();
        prop_assert_eq!(given.catalogs, sorted.catalogs);
    }
}
