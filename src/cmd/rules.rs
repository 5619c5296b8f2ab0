//! `fieldgate rules`: show the schema and rule table in effect.

use anyhow::Result;
use std::path::Path;

use fieldgate::domain::Validator;
use fieldgate::formatters::format_rules;

pub fn cmd_rules(config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let validator = Validator::from_config(&config)?;

    println!("{}", format_rules(&validator));
    Ok(())
}
