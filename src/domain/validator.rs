//! Two-phase record validator.

use anyhow::Result;
use serde::Serialize;

use super::presence::{self, RequiredFields};
use crate::config::Config;
use crate::record::Record;
use crate::rules::RuleTable;

/// Per-record outcome of both phases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Required fields the record lacks
    pub missing: Vec<String>,
    /// Present fields whose rule rejected the value
    pub invalid: Vec<String>,
}

impl Verdict {
    pub fn passes_presence(&self) -> bool {
        self.missing.is_empty()
    }

    /// Phase 2 pass: presence and every field rule hold.
    pub fn passes_all(&self) -> bool {
        self.passes_presence() && self.invalid.is_empty()
    }
}

/// Required-field set plus rule table, fixed for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct Validator {
    required: RequiredFields,
    rules: RuleTable,
}

impl Validator {
    pub fn new(required: RequiredFields, rules: RuleTable) -> Self {
        Self { required, rules }
    }

    /// Passport schema (all fields but `cid` required) with passport rules.
    pub fn passport() -> Self {
        Self::new(RequiredFields::passport(), RuleTable::passport())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.required_fields(), config.rule_table()?))
    }

    pub fn required(&self) -> &RequiredFields {
        &self.required
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Phase 1 for one record.
    pub fn has_required_fields(&self, record: &Record) -> bool {
        presence::has_required_fields(record, &self.required)
    }

    pub fn missing_fields(&self, record: &Record) -> Vec<&str> {
        presence::missing_fields(record, &self.required)
    }

    /// Every key of the record satisfies its rule, or has none.
    ///
    /// All of the record's keys are checked, not only the required ones.
    pub fn is_valid(&self, record: &Record) -> bool {
        record
            .iter()
            .all(|(field, value)| self.rules.check(field, value))
    }

    /// Keys whose rule rejects the value, in key order.
    pub fn invalid_fields<'r>(&self, record: &'r Record) -> Vec<&'r str> {
        record
            .iter()
            .filter(|(field, value)| !self.rules.check(field, value))
            .map(|(field, _)| field)
            .collect()
    }

    /// Phase 2 for one record: phase 1 must pass as well.
    pub fn passes_all(&self, record: &Record) -> bool {
        self.has_required_fields(record) && self.is_valid(record)
    }

    /// Full diagnostic for one record.
    pub fn evaluate(&self, record: &Record) -> Verdict {
        Verdict {
            missing: self
                .missing_fields(record)
                .into_iter()
                .map(String::from)
                .collect(),
            invalid: self
                .invalid_fields(record)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::passport()
    }
}
