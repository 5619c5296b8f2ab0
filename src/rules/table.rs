//! Field name to predicate lookup.

use anyhow::Result;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::{Bounds, FieldRule};

/// Eye colours accepted by the passport `ecl` rule.
pub const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

type CustomPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

#[derive(Clone)]
enum Entry {
    Declared {
        rule: FieldRule,
        compiled: Option<Regex>,
    },
    Custom(CustomPredicate),
}

impl Entry {
    fn check(&self, value: &str) -> bool {
        match self {
            Entry::Declared { rule, compiled } => rule.check(compiled.as_ref(), value),
            Entry::Custom(predicate) => predicate(value),
        }
    }
}

/// Rule table: field name to predicate.
///
/// Fields without an entry are always valid. The table is built once and
/// only read while validating.
#[derive(Clone, Default)]
pub struct RuleTable {
    entries: BTreeMap<String, Entry>,
}

impl RuleTable {
    /// Create an empty table (every field valid)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from declarative rules, compiling `pattern` rules.
    pub fn from_rules<I, S>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, FieldRule)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (field, rule) in rules {
            table.insert(field, rule)?;
        }
        Ok(table)
    }

    /// The built-in passport rule table.
    pub fn passport() -> Self {
        let mut table = Self::new();
        // Built-in rules carry no patterns
        for (field, rule) in passport_rules() {
            table.entries.insert(
                field.to_string(),
                Entry::Declared {
                    rule,
                    compiled: None,
                },
            );
        }
        table
    }

    /// Register a declarative rule, replacing any existing entry.
    pub fn insert(&mut self, field: impl Into<String>, rule: FieldRule) -> Result<()> {
        let compiled = rule.compile()?;
        self.entries
            .insert(field.into(), Entry::Declared { rule, compiled });
        Ok(())
    }

    /// Register a code-defined predicate, replacing any existing entry.
    pub fn insert_predicate<F>(&mut self, field: impl Into<String>, predicate: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.entries
            .insert(field.into(), Entry::Custom(Arc::new(predicate)));
    }

    /// Check one field value. Unknown fields pass.
    pub fn check(&self, field: &str, value: &str) -> bool {
        self.entries
            .get(field)
            .map(|entry| entry.check(value))
            .unwrap_or(true)
    }

    pub fn has_rule(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Declarative rule for a field, if one is registered.
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        match self.entries.get(field)? {
            Entry::Declared { rule, .. } => Some(rule),
            Entry::Custom(_) => None,
        }
    }

    /// Field names with an entry, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, entry) in &self.entries {
            match entry {
                Entry::Declared { rule, .. } => map.entry(field, rule),
                Entry::Custom(_) => map.entry(field, &"<custom>"),
            };
        }
        map.finish()
    }
}

/// Passport field rules. `cid` deliberately has no entry.
pub fn passport_rules() -> Vec<(&'static str, FieldRule)> {
    vec![
        ("byr", FieldRule::year(1920, 2002)),
        ("iyr", FieldRule::year(2010, 2020)),
        ("eyr", FieldRule::year(2020, 2030)),
        (
            "hgt",
            FieldRule::height(Bounds::new(150, 193), Bounds::new(59, 76)),
        ),
        ("hcl", FieldRule::HexColor),
        ("ecl", FieldRule::one_of(&EYE_COLORS)),
        ("pid", FieldRule::length(9)),
    ]
}
