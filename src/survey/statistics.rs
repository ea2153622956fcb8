// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters accumulated over a survey, one per [`Counters`] entry plus one per
//! [`ViolationKind`]. Each parallel worker keeps its own statistics; the
//! survey adds them together once the workers finish.

use crate::check::{Verdict, ViolationKind};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    RadiiChecked,
    RadiiPassed,
    PointsGenerated,
}

const COUNT: usize = Counters::COUNT + ViolationKind::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Account for one checked radius.
    pub fn record(&mut self, point_count: usize, verdict: &Verdict) {
        self.increment_counter(Counters::RadiiChecked, 1);
        self.increment_counter(Counters::PointsGenerated, point_count as u64);
        match verdict.violation() {
            None => self.increment_counter(Counters::RadiiPassed, 1),
            Some(violation) => self.stats[Counters::COUNT + violation.kind() as usize] += 1,
        }
    }

    fn increment_counter(&mut self, counter: Counters, by: u64) {
        self.stats[counter as usize] += by;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of radii whose first violation was of the given kind.
    pub fn failures(&self, kind: ViolationKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }

    pub fn radii_failed(&self) -> u64 {
        self.get(Counters::RadiiChecked) - self.get(Counters::RadiiPassed)
    }

    /// Add another set of counters into this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (ours, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *ours += theirs;
        }
    }
}
