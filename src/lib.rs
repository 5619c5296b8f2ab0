//! # fieldgate - two-phase record validation
//!
//! fieldgate checks batches of flat key/value records against a declarative
//! rule table, in two independent phases:
//!
//! 1. **Presence**: every required field is a key of the record.
//! 2. **Validity**: every field of the record satisfies its registered rule.
//!    Fields without a rule are always valid.
//!
//! A record passes phase 2 only if it also passes phase 1, so the phase 2
//! count never exceeds the phase 1 count.
//!
//! ## Modules
//!
//! - [`record`] - the flat string-keyed [`Record`](record::Record)
//! - [`rules`] - declarative field rules and the rule table
//! - [`domain`] - presence checks, the validator and batch counting
//! - [`parse`] - parsing blank-line separated `key:value` batches
//! - [`config`] - schema and rule configuration files
//!
//! ## Example
//!
//! ```
//! use fieldgate::domain::{BatchCounter, Validator};
//! use fieldgate::parse::parse_records;
//!
//! let records = parse_records(
//!     "ecl:gry pid:860033327 eyr:2020 hcl:#fffffd\n\
//!      byr:1937 iyr:2017 cid:147 hgt:183cm\n",
//! )
//! .unwrap();
//!
//! let validator = Validator::passport();
//! let counter = BatchCounter::new(&validator);
//! assert_eq!(counter.count_phase1(&records), 1);
//! assert_eq!(counter.count_phase2(&records), 1);
//! ```

pub mod config;
pub mod domain;
pub mod formatters;
pub mod parse;
pub mod record;
pub mod rules;
pub mod ui;

/// Default path constants for the fieldgate directory structure.
pub mod paths {
    /// Directory holding project configuration: `.fieldgate`
    pub const CONFIG_DIR: &str = ".fieldgate";
    /// Project configuration file: `.fieldgate/config.md`
    pub const CONFIG_FILE: &str = ".fieldgate/config.md";
}
