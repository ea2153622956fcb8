// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Batch checking over ranges of radii.
//!
//! Each radius is handled independently: generate the ring, index it, check
//! it while cataloguing masks into catalogs local to that radius. The local
//! catalogs are then merged into the survey's catalogs, and the masks the
//! merge added become the radius's catalog delta.
//!
//! # Parallelization
//!
//! [`Survey::run_parallel`] deals the radii out to scoped worker threads
//! round-robin, never more workers than radii. Workers share nothing; each
//! returns its per-radius results and its own [`Statistics`]. The calling
//! thread is the single writer: it sorts the results by radius, merges them
//! exactly as [`Survey::run`] does and adds the worker statistics together,
//! so a parallel survey reports the same outcomes, deltas, catalogs and
//! counters as a sequential one.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use std::ops::RangeInclusive;
use std::thread;

use tracing::{debug, info, trace, warn};

use crate::check::{InvariantChecker, Verdict};
use crate::config::SurveyConfig;
use crate::error::RingError;
use crate::mask::{Catalogs, Mask};
use crate::geometry::Point;
use crate::ring::{AnnulusBounds, NeighborIndex, Ring};

/// Result of checking one radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiusOutcome {
    pub radius: i64,
    pub point_count: usize,
    pub verdict: Verdict,
    /// Masks this radius added to the all-configurations catalog, ascending.
    pub new_configurations: Vec<Mask>,
    /// Masks this radius added to the forbidden catalog, ascending.
    pub new_forbidden: Vec<Mask>,
}

/// A radius checked in isolation, before merging.
#[derive(Debug)]
struct RadiusSurvey {
    radius: i64,
    point_count: usize,
    verdict: Verdict,
    catalogs: Catalogs,
}

impl RadiusSurvey {
    fn run(radius: i64, config: &SurveyConfig) -> Result<Self, RingError> {
        let ring = Ring::generate(radius)?;
        Ok(Self::from_points(radius, ring.points(), config))
    }

    /// Check an explicit point set as the ring of `radius`.
    fn from_points(radius: i64, points: &[Point], config: &SurveyConfig) -> Self {
        let index = NeighborIndex::new(points);
        let mut catalogs = Catalogs::new(config.record_forbidden);
        let verdict = InvariantChecker::new(config.scope).check_points_and_catalogue(
            points,
            &index,
            &mut catalogs,
        );
        Self {
            radius,
            point_count: points.len(),
            verdict,
            catalogs,
        }
    }

    fn merge_into(self, catalogs: &mut Catalogs) -> RadiusOutcome {
        let delta = catalogs.merge(&self.catalogs);
        match &self.verdict {
            Verdict::Pass => debug!(
                radius = self.radius,
                points = self.point_count,
                new_masks = delta.configurations.len(),
                "radius passed"
            ),
            Verdict::Fail(violation) => warn!(
                radius = self.radius,
                points = self.point_count,
                %violation,
                "radius failed"
            ),
        }
        RadiusOutcome {
            radius: self.radius,
            point_count: self.point_count,
            verdict: self.verdict,
            new_configurations: delta.configurations,
            new_forbidden: delta.forbidden,
        }
    }
}

/// What one parallel worker hands back.
#[derive(Debug, Default)]
struct WorkerResult {
    surveyed: Vec<RadiusSurvey>,
    statistics: Statistics,
}

impl WorkerResult {
    fn push(&mut self, radius_survey: RadiusSurvey) {
        self.statistics
            .record(radius_survey.point_count, &radius_survey.verdict);
        self.surveyed.push(radius_survey);
    }
}

/// Check one radius, merging its masks into `catalogs`.
///
/// # Errors
///
/// Fails only on an invalid radius; a ring that breaks the invariant is
/// reported through [`RadiusOutcome::verdict`].
pub fn check_radius(
    radius: i64,
    config: &SurveyConfig,
    catalogs: &mut Catalogs,
) -> Result<RadiusOutcome, RingError> {
    Ok(RadiusSurvey::run(radius, config)?.merge_into(catalogs))
}

/// Check radii in the order given, accumulating catalogs and statistics.
///
/// A failing radius never stops the batch.
pub fn survey_radii(
    radii: impl IntoIterator<Item = i64>,
    config: &SurveyConfig,
) -> Result<SurveyReport, RingError> {
    collect_in_order(
        radii.into_iter().map(|radius| RadiusSurvey::run(radius, config)),
        config.record_forbidden,
    )
}

fn collect_in_order(
    surveyed: impl IntoIterator<Item = Result<RadiusSurvey, RingError>>,
    record_forbidden: bool,
) -> Result<SurveyReport, RingError> {
    let mut report = SurveyReport::new(record_forbidden);
    for radius_survey in surveyed {
        let radius_survey = radius_survey?;
        report
            .statistics
            .record(radius_survey.point_count, &radius_survey.verdict);
        let outcome = radius_survey.merge_into(&mut report.catalogs);
        report.outcomes.push(outcome);
    }
    Ok(report)
}

/// Merge worker results in radius order and add up their statistics.
fn assemble(workers: Vec<WorkerResult>, record_forbidden: bool) -> SurveyReport {
    let mut report = SurveyReport::new(record_forbidden);
    let mut surveyed = Vec::new();
    for worker in workers {
        report.statistics.merge(&worker.statistics);
        surveyed.extend(worker.surveyed);
    }
    surveyed.sort_by_key(|s| s.radius);
    for radius_survey in surveyed {
        let outcome = radius_survey.merge_into(&mut report.catalogs);
        report.outcomes.push(outcome);
    }
    report
}

/// Everything a batch run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyReport {
    /// One outcome per radius, in processing order.
    pub outcomes: Vec<RadiusOutcome>,
    pub catalogs: Catalogs,
    pub statistics: Statistics,
}

impl SurveyReport {
    fn new(record_forbidden: bool) -> Self {
        Self {
            outcomes: Vec::new(),
            catalogs: Catalogs::new(record_forbidden),
            statistics: Statistics::new(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.verdict.is_pass())
    }

    pub fn failures(&self) -> impl Iterator<Item = &RadiusOutcome> {
        self.outcomes.iter().filter(|o| !o.verdict.is_pass())
    }
}

/// A batch over an inclusive range of radii.
#[derive(Debug, Clone)]
pub struct Survey {
    radii: RangeInclusive<i64>,
    config: SurveyConfig,
}

impl Survey {
    /// Validate the range up front so a bad bound fails before any work.
    ///
    /// # Errors
    ///
    /// [`RingError::EmptyRange`] if `start > end`, and the radius errors of
    /// [`AnnulusBounds::for_radius`] for either bound.
    pub fn new(start: i64, end: i64, config: SurveyConfig) -> Result<Self, RingError> {
        if start > end {
            return Err(RingError::EmptyRange { start, end });
        }
        AnnulusBounds::for_radius(start)?;
        AnnulusBounds::for_radius(end)?;
        Ok(Self {
            radii: start..=end,
            config,
        })
    }

    pub fn radii(&self) -> RangeInclusive<i64> {
        self.radii.clone()
    }

    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Run on the calling thread when `config.workers` is 1, otherwise in parallel.
    ///
    /// # Errors
    ///
    /// As [`Survey::run_parallel`], including [`RingError::NoWorkers`] for 0.
    pub fn execute(&self) -> Result<SurveyReport, RingError> {
        if self.config.workers == 1 {
            self.run()
        } else {
            self.run_parallel()
        }
    }

    /// Check every radius in increasing order on the calling thread.
    pub fn run(&self) -> Result<SurveyReport, RingError> {
        info!(
            start = *self.radii.start(),
            end = *self.radii.end(),
            "starting survey"
        );
        let report = survey_radii(self.radii(), &self.config)?;
        self.log_summary(&report);
        Ok(report)
    }

    /// Check every radius on up to `config.workers` threads.
    ///
    /// Produces the same report as [`Survey::run`]. No more threads than
    /// radii are started.
    ///
    /// # Errors
    ///
    /// [`RingError::NoWorkers`] if `config.workers` is 0, and
    /// [`RingError::WorkerSpawn`] if the OS refuses a thread.
    pub fn run_parallel(&self) -> Result<SurveyReport, RingError> {
        if self.config.workers == 0 {
            return Err(RingError::NoWorkers);
        }
        let radius_count = usize::try_from(self.radii.end() - self.radii.start())
            .map_or(usize::MAX, |n| n.saturating_add(1));
        let workers = self.config.workers.min(radius_count);
        info!(
            start = *self.radii.start(),
            end = *self.radii.end(),
            workers,
            "starting parallel survey"
        );

        let config = &self.config;
        let results: Vec<Result<WorkerResult, RingError>> = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            for worker in 0..workers {
                let radii = self.radii().skip(worker).step_by(workers);
                let spawned = thread::Builder::new()
                    .name(format!("ring-survey-{}", worker))
                    .spawn_scoped(scope, move || -> Result<WorkerResult, RingError> {
                        let mut result = WorkerResult::default();
                        for radius in radii {
                            result.push(RadiusSurvey::run(radius, config)?);
                        }
                        trace!(worker, "worker finished");
                        Ok(result)
                    });
                match spawned {
                    Ok(handle) => handles.push(Ok(handle)),
                    Err(err) => {
                        handles.push(Err(RingError::WorkerSpawn {
                            worker,
                            reason: err.to_string(),
                        }));
                        break;
                    }
                }
            }
            handles
                .into_iter()
                .map(|handle| -> Result<WorkerResult, RingError> {
                    match handle?.join() {
                        Ok(result) => result,
                        Err(panic) => std::panic::resume_unwind(panic),
                    }
                })
                .collect()
        });

        let workers = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        let report = assemble(workers, config.record_forbidden);
        self.log_summary(&report);
        Ok(report)
    }

    fn log_summary(&self, report: &SurveyReport) {
        info!(
            radii = report.statistics.get(Counters::RadiiChecked),
            passed = report.statistics.get(Counters::RadiiPassed),
            failed = report.statistics.radii_failed(),
            configurations = report.catalogs.configurations().len(),
            forbidden = report.catalogs.forbidden().map_or(0, |f| f.len()),
            "survey complete"
        );
    }
}
