//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::presence::{PASSPORT_FIELDS, PASSPORT_IGNORED};
use crate::rules::{passport_rules, FieldRule};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(
    default_fields,
    Vec<String>,
    PASSPORT_FIELDS.iter().map(|f| f.to_string()).collect()
);
default_fn!(
    default_ignore,
    Vec<String>,
    PASSPORT_IGNORED.iter().map(|f| f.to_string()).collect()
);
default_fn!(
    default_rules,
    BTreeMap<String, FieldRule>,
    passport_rules()
        .into_iter()
        .map(|(field, rule)| (field.to_string(), rule))
        .collect()
);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Record schema: which fields exist and which of them may be absent
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemaConfig {
    /// Full list of schema fields (default: passport fields)
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    /// Fields exempt from the presence check (default: cid)
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            ignore: default_ignore(),
        }
    }
}

/// Output format for `check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Single JSON document
    Json,
}

/// Defaults for the `check` command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct CheckConfig {
    /// Exit non-zero when any record fails phase 2
    #[serde(default)]
    pub strict: bool,
    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}
