//! Configuration management for fieldgate.
//!
//! Configuration lives in a markdown file whose YAML frontmatter holds the
//! record schema, the rule table and `check` defaults:
//!
//! ```text
//! ---
//! schema:
//!   fields: [byr, iyr, eyr, hgt, hcl, ecl, pid, cid]
//!   ignore: [cid]
//! rules:
//!   byr: { type: year, min: 1920, max: 2002 }
//!   pid: { type: length, len: 9 }
//! ---
//! ```
//!
//! Every section is optional. A missing `rules` section means the built-in
//! passport rules; `rules: {}` means no rules at all.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::RequiredFields;
use crate::paths::CONFIG_FILE;
use crate::rules::{FieldRule, RuleTable};

pub mod defaults;
pub mod validation;

pub use defaults::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub schema: SchemaConfig,
    #[serde(default = "defaults::default_rules")]
    pub rules: BTreeMap<String, FieldRule>,
    #[serde(default)]
    pub check: CheckConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: SchemaConfig::default(),
            rules: defaults::default_rules(),
            check: CheckConfig::default(),
        }
    }
}

impl Config {
    /// Load `.fieldgate/config.md` if present, otherwise the built-in
    /// passport configuration.
    pub fn load() -> Result<Self> {
        Self::load_or_default(Path::new(CONFIG_FILE))
    }

    /// Load from `path` if it exists, otherwise return the default config.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using built-in passport schema");
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            fields = config.schema.fields.len(),
            rules = config.rules.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        // An empty frontmatter block is a valid, all-defaults config
        let config: Config = if frontmatter.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?
        };

        config.validate()?;

        Ok(config)
    }

    /// Required-field set: schema fields minus the ignore list.
    pub fn required_fields(&self) -> RequiredFields {
        RequiredFields::from_schema(&self.schema.fields, &self.schema.ignore)
    }

    /// Compile the configured rules into a lookup table.
    pub fn rule_table(&self) -> Result<RuleTable> {
        RuleTable::from_rules(
            self.rules
                .iter()
                .map(|(field, rule)| (field.clone(), rule.clone())),
        )
    }

    /// Render as a config file with YAML frontmatter.
    pub fn render(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config")?;
        Ok(format!(
            "---\n{}---\n\n# fieldgate configuration\n\n\
             `schema.fields` lists every field of a record and `schema.ignore` the\n\
             fields that may be absent. Each entry under `rules` constrains one field;\n\
             fields without a rule accept any value.\n",
            yaml
        ))
    }
}

/// Split content into frontmatter and body.
///
/// If the content starts with `---`, extracts the YAML frontmatter between
/// the first and second `---` delimiters, and returns the body after.
/// Otherwise returns None for frontmatter and the entire content as body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    match rest.find("\n---") {
        Some(end) => {
            let frontmatter = rest[..end].to_string();
            let body = rest[end + 4..].trim_start();
            (Some(frontmatter), body)
        }
        None => (None, content),
    }
}
