// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Survey configuration.

/// Which points contribute their mask to the all-configurations catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogScope {
    /// Only points with exactly two neighbours, the cases the adjacency rule
    /// actually has to decide.
    #[default]
    TwoNeighbors,
    /// Every point visited by the checker, recorded before its neighbour
    /// count is tested.
    EveryPoint,
}

/// Options for checking one radius or a batch of radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyConfig {
    pub record_forbidden: bool,
    pub scope: CatalogScope,
    /// Worker threads for [`crate::survey::Survey::run_parallel`].
    pub workers: usize,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            record_forbidden: true,
            scope: CatalogScope::default(),
            workers: 1,
        }
    }
}

impl SurveyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forbidden(mut self, record_forbidden: bool) -> Self {
        self.record_forbidden = record_forbidden;
        self
    }

    pub fn with_scope(mut self, scope: CatalogScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}
