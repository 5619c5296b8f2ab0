//! Checked numeric parsing for range rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of parsing a field value as an integer.
///
/// `NotANumber` never falls inside any [`Bounds`], so a malformed numeric
/// field always fails its range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeric {
    Value(i64),
    NotANumber,
}

impl Numeric {
    /// Parse an optionally signed decimal integer. Anything else, including
    /// the empty string, is `NotANumber`.
    pub fn parse(raw: &str) -> Self {
        raw.parse::<i64>()
            .map(Numeric::Value)
            .unwrap_or(Numeric::NotANumber)
    }

    pub fn within(self, bounds: Bounds) -> bool {
        match self {
            Numeric::Value(n) => bounds.contains(n),
            Numeric::NotANumber => false,
        }
    }
}

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, n: i64) -> bool {
        self.min <= n && n <= self.max
    }

    /// Validate bounds read from configuration
    pub fn validate(&self, context: &str) -> anyhow::Result<()> {
        if self.min > self.max {
            anyhow::bail!(
                "{}: min must be <= max, got min {} and max {}",
                context,
                self.min,
                self.max
            );
        }
        Ok(())
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
