//! Batch counting over both validation phases.
//!
//! Every record is evaluated independently; a failing record never stops the
//! pass. Counts are plain sums, so tallies of disjoint slices of a batch can
//! be added together to get the tally of the whole.

use serde::Serialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use super::validator::{Validator, Verdict};
use crate::record::Record;

/// Pass counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchTally {
    /// Records evaluated
    pub total: usize,
    /// Records with every required field present
    pub phase1: usize,
    /// Records that also satisfy every field rule
    pub phase2: usize,
}

impl Add for BatchTally {
    type Output = BatchTally;

    fn add(self, other: BatchTally) -> BatchTally {
        BatchTally {
            total: self.total + other.total,
            phase1: self.phase1 + other.phase1,
            phase2: self.phase2 + other.phase2,
        }
    }
}

impl AddAssign for BatchTally {
    fn add_assign(&mut self, other: BatchTally) {
        *self = *self + other;
    }
}

impl Sum for BatchTally {
    fn sum<I: Iterator<Item = BatchTally>>(iter: I) -> Self {
        iter.fold(BatchTally::default(), Add::add)
    }
}

/// A record that failed at least one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutcome {
    /// Zero-based position in the batch
    pub index: usize,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Tally plus the failing records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    #[serde(flatten)]
    pub tally: BatchTally,
    pub failures: Vec<RecordOutcome>,
}

/// Drives the validator over a batch of records.
#[derive(Debug, Clone, Copy)]
pub struct BatchCounter<'v> {
    validator: &'v Validator,
}

impl<'v> BatchCounter<'v> {
    pub fn new(validator: &'v Validator) -> Self {
        Self { validator }
    }

    /// Records passing phase 1.
    pub fn count_phase1(&self, records: &[Record]) -> usize {
        records
            .iter()
            .filter(|r| self.validator.has_required_fields(r))
            .count()
    }

    /// Records passing phase 1 and phase 2.
    pub fn count_phase2(&self, records: &[Record]) -> usize {
        records
            .iter()
            .filter(|r| self.validator.passes_all(r))
            .count()
    }

    /// Both counts in a single pass.
    pub fn tally(&self, records: &[Record]) -> BatchTally {
        records
            .iter()
            .map(|r| {
                let present = self.validator.has_required_fields(r);
                BatchTally {
                    total: 1,
                    phase1: usize::from(present),
                    phase2: usize::from(present && self.validator.is_valid(r)),
                }
            })
            .sum()
    }

    /// Tally and per-record diagnostics for records that fail.
    pub fn report(&self, records: &[Record]) -> BatchReport {
        let mut report = BatchReport::default();
        for (index, record) in records.iter().enumerate() {
            let verdict = self.validator.evaluate(record);
            report.tally += BatchTally {
                total: 1,
                phase1: usize::from(verdict.passes_presence()),
                phase2: usize::from(verdict.passes_all()),
            };
            if !verdict.passes_all() {
                report.failures.push(RecordOutcome { index, verdict });
            }
        }
        report
    }
}

/// Phase 1 count with the given validator.
pub fn count_phase1(validator: &Validator, records: &[Record]) -> usize {
    BatchCounter::new(validator).count_phase1(records)
}

/// Phase 2 count with the given validator.
pub fn count_phase2(validator: &Validator, records: &[Record]) -> usize {
    BatchCounter::new(validator).count_phase2(records)
}
