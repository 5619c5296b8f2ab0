//! Domain logic module containing pure validation functions.
//!
//! Nothing here performs I/O or logs: phase 1 ([`presence`]) checks that
//! required fields exist, phase 2 ([`validator`]) applies the rule table to
//! every field, and [`batch`] counts both over a sequence of records.

pub mod batch;
pub mod presence;
pub mod validator;

pub use batch::{count_phase1, count_phase2, BatchCounter, BatchReport, BatchTally, RecordOutcome};
pub use presence::{has_required_fields, missing_fields, RequiredFields};
pub use validator::{Validator, Verdict};
