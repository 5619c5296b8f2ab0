//! Validation logic for configuration values.

use anyhow::Result;

use super::defaults::SchemaConfig;
use super::Config;

impl Config {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.schema.validate()?;

        for (field, rule) in &self.rules {
            rule.validate(field)?;
        }

        Ok(())
    }
}

impl SchemaConfig {
    /// Validate schema configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(blank) = self.fields.iter().find(|f| f.trim().is_empty()) {
            anyhow::bail!("schema.fields contains a blank field name: {:?}", blank);
        }

        for name in &self.ignore {
            if !self.fields.contains(name) {
                tracing::warn!(field = %name, "schema.ignore names a field that is not in schema.fields");
            }
        }

        Ok(())
    }
}
