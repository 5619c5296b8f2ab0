//! `fieldgate check`: validate a record batch and print per-phase counts.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use fieldgate::config::OutputFormat;
use fieldgate::domain::{BatchCounter, Validator};
use fieldgate::formatters::{format_report_json, format_report_text};
use fieldgate::parse::load_records;
use fieldgate::ui::{self, outcome_icon};

pub fn cmd_check(
    input: &Path,
    config_path: Option<&Path>,
    format: Option<OutputFormat>,
    verbose: bool,
    strict: bool,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let validator = Validator::from_config(&config)?;
    let records = load_records(input)?;

    tracing::info!(
        input = %input.display(),
        records = records.len(),
        required = validator.required().len(),
        rules = validator.rules().len(),
        "checking batch"
    );

    let report = BatchCounter::new(&validator).report(&records);
    let tally = report.tally;

    match format.unwrap_or(config.check.format) {
        OutputFormat::Json => println!("{}", format_report_json(&report, verbose)?),
        OutputFormat::Text if ui::is_quiet() => {
            println!("{}", tally.phase1);
            println!("{}", tally.phase2);
        }
        OutputFormat::Text => {
            println!(
                "{} {} {}",
                outcome_icon(tally.phase2 == tally.total),
                "Checked".bold(),
                input.display()
            );
            println!("{}", format_report_text(&report, verbose));
        }
    }

    if (strict || config.check.strict) && tally.phase2 < tally.total {
        tracing::debug!(
            failed = tally.total - tally.phase2,
            "strict mode: records failed validation"
        );
        std::process::exit(1);
    }

    Ok(())
}
