//! Declarative per-field rules and the rule table.
//!
//! A [`FieldRule`] is a predicate over one raw string value. Rules are plain
//! data: they deserialize from the `rules` section of the configuration file
//! and are collected into a [`RuleTable`] keyed by field name.
//!
//! # Rule kinds
//!
//! - `year`: exactly four characters and an integer within bounds
//! - `height`: numeric prefix (value minus its two-character unit) within the
//!   `cm` bounds when the value contains `cm`, otherwise within the `in` bounds
//! - `hex_color`: `#` followed by six lowercase hex digits
//! - `one_of`: exact membership in a fixed list
//! - `length`: exact character count, any content
//! - `pattern`: regular expression match
//! - `any`: always valid

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod numeric;
pub mod table;

pub use numeric::{Bounds, Numeric};
pub use table::{passport_rules, RuleTable};

/// A declarative validation rule for a single field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldRule {
    /// Four-character year within an inclusive range
    Year { min: i64, max: i64 },
    /// Height with a two-character unit suffix
    Height {
        cm: Bounds,
        #[serde(rename = "in")]
        inches: Bounds,
    },
    /// `#rrggbb` colour in lowercase hex
    HexColor,
    /// Value must be one of the listed strings
    OneOf { values: Vec<String> },
    /// Value must be exactly `len` characters long
    Length { len: usize },
    /// Value must match the regular expression (unanchored unless the
    /// expression anchors itself)
    Pattern { regex: String },
    /// No constraint
    Any,
}

impl FieldRule {
    pub fn year(min: i64, max: i64) -> Self {
        FieldRule::Year { min, max }
    }

    pub fn height(cm: Bounds, inches: Bounds) -> Self {
        FieldRule::Height { cm, inches }
    }

    pub fn one_of<S: AsRef<str>>(values: &[S]) -> Self {
        FieldRule::OneOf {
            values: values.iter().map(|v| v.as_ref().to_string()).collect(),
        }
    }

    pub fn length(len: usize) -> Self {
        FieldRule::Length { len }
    }

    pub fn pattern(regex: &str) -> Self {
        FieldRule::Pattern {
            regex: regex.to_string(),
        }
    }

    /// Check a raw value against this rule.
    ///
    /// `compiled` is the output of [`FieldRule::compile`]. A `pattern` rule
    /// without it matches nothing. Callers outside the crate go through
    /// [`RuleTable::check`], which compiles each pattern once on insert.
    pub(crate) fn check(&self, compiled: Option<&Regex>, value: &str) -> bool {
        match self {
            FieldRule::Year { min, max } => {
                value.chars().count() == 4 && Numeric::parse(value).within(Bounds::new(*min, *max))
            }
            FieldRule::Height { cm, inches } => {
                let amount = Numeric::parse(strip_unit(value));
                if value.contains("cm") {
                    amount.within(*cm)
                } else {
                    amount.within(*inches)
                }
            }
            FieldRule::HexColor => is_hex_color(value),
            FieldRule::OneOf { values } => values.iter().any(|v| v == value),
            FieldRule::Length { len } => value.chars().count() == *len,
            FieldRule::Pattern { .. } => compiled.is_some_and(|re| re.is_match(value)),
            FieldRule::Any => true,
        }
    }

    /// Compile the regular expression of a `pattern` rule.
    pub(crate) fn compile(&self) -> Result<Option<Regex>> {
        match self {
            FieldRule::Pattern { regex } => Regex::new(regex)
                .map(Some)
                .with_context(|| format!("Invalid pattern rule: {}", regex)),
            _ => Ok(None),
        }
    }

    /// Validate rule parameters read from configuration
    pub fn validate(&self, field: &str) -> Result<()> {
        let context = format!("rules.{}", field);
        match self {
            FieldRule::Year { min, max } => Bounds::new(*min, *max).validate(&context),
            FieldRule::Height { cm, inches } => {
                cm.validate(&format!("{}.cm", context))?;
                inches.validate(&format!("{}.in", context))
            }
            FieldRule::OneOf { values } if values.is_empty() => {
                anyhow::bail!("{}: one_of needs at least one value", context)
            }
            FieldRule::Length { len: 0 } => {
                anyhow::bail!("{}: length must be greater than 0", context)
            }
            FieldRule::Pattern { .. } => self.compile().map(|_| ()).context(context),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRule::Year { min, max } => write!(f, "4-digit year in {}", Bounds::new(*min, *max)),
            FieldRule::Height { cm, inches } => write!(f, "height {} cm or {} in", cm, inches),
            FieldRule::HexColor => write!(f, "#rrggbb hex colour"),
            FieldRule::OneOf { values } => write!(f, "one of {}", values.join(", ")),
            FieldRule::Length { len } => write!(f, "exactly {} characters", len),
            FieldRule::Pattern { regex } => write!(f, "matches /{}/", regex),
            FieldRule::Any => write!(f, "any value"),
        }
    }
}

/// Drop the trailing two-character unit, respecting char boundaries.
fn strip_unit(value: &str) -> &str {
    let cut = value
        .char_indices()
        .rev()
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    &value[..cut]
}

fn is_hex_color(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next() == Some('#')
        && value.chars().count() == 7
        && chars.all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}
