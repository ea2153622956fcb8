// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Errors for contract violations at the library boundary.
//!
//! A ring failing its connectivity invariant is not an error; see
//! [`crate::check::Verdict`].

use thiserror::Error;

/// Invalid arguments passed to the ring generator or a survey.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// Radii are non-negative.
    #[error("radius must be non-negative, got {radius}")]
    NegativeRadius { radius: i64 },

    /// Radius beyond the range where the exact bounds fit in `i64`.
    #[error("radius {radius} exceeds the maximum supported radius {max}")]
    RadiusTooLarge { radius: i64, max: i64 },

    /// A survey over an empty range of radii.
    #[error("empty radius range {start}..={end}")]
    EmptyRange { start: i64, end: i64 },

    /// A parallel survey needs at least one worker.
    #[error("a parallel survey needs at least one worker")]
    NoWorkers,

    /// The OS refused to start a survey worker thread.
    #[error("failed to start survey worker {worker}: {reason}")]
    WorkerSpawn { worker: usize, reason: String },
}
