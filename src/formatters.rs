//! Output formatters for batch reports and rule listings
//!
//! Formatters only build strings; printing is left to the CLI.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::domain::{BatchReport, RecordOutcome, Validator};
use crate::ui::{colors, format::percent, format::separator, outcome_icon};

/// Format a batch report as a short text summary.
///
/// With `verbose`, one line per failing record follows the counts.
pub fn format_report_text(report: &BatchReport, verbose: bool) -> String {
    let tally = &report.tally;
    let mut output = vec![
        format!(
            "  {:<24} {}",
            "Records:",
            tally.total.to_string().bold()
        ),
        format!(
            "  {:<24} {} ({}%)",
            "Required fields present:",
            colors::success(&tally.phase1.to_string()),
            percent(tally.phase1, tally.total)
        ),
        format!(
            "  {:<24} {} ({}%)",
            "Fully valid:",
            colors::success(&tally.phase2.to_string()),
            percent(tally.phase2, tally.total)
        ),
    ];

    if verbose && !report.failures.is_empty() {
        output.push(String::new());
        output.push(colors::heading("Failures").to_string());
        output.push(separator(8));
        for failure in &report.failures {
            output.push(format_failure(failure));
        }
    }

    output.join("\n")
}

/// Format a batch report as pretty JSON.
pub fn format_report_json(report: &BatchReport, verbose: bool) -> Result<String> {
    let value = if verbose {
        serde_json::to_value(report)
    } else {
        serde_json::to_value(report.tally)
    }
    .context("Failed to serialize report")?;

    serde_json::to_string_pretty(&value).context("Failed to serialize report")
}

/// One line per failing record: index, missing fields, invalid fields.
fn format_failure(failure: &RecordOutcome) -> String {
    let mut parts = Vec::new();
    if !failure.verdict.missing.is_empty() {
        parts.push(format!(
            "missing {}",
            colors::error(&failure.verdict.missing.join(", "))
        ));
    }
    if !failure.verdict.invalid.is_empty() {
        parts.push(format!(
            "invalid {}",
            colors::warning(&failure.verdict.invalid.join(", "))
        ));
    }

    format!(
        "  {} record {}: {}",
        outcome_icon(false),
        colors::identifier(&(failure.index + 1).to_string()),
        parts.join("; ")
    )
}

/// Format the required fields and the rule table of a validator.
pub fn format_rules(validator: &Validator) -> String {
    let mut output = vec![colors::heading("Required fields").to_string()];
    if validator.required().is_empty() {
        output.push(colors::secondary("  (none)").to_string());
    } else {
        let names: Vec<&str> = validator.required().iter().collect();
        output.push(format!("  {}", names.join(" ")));
    }

    output.push(String::new());
    output.push(colors::heading("Rules").to_string());
    let rules = validator.rules();
    if rules.is_empty() {
        output.push(colors::secondary("  (no rules, every value is valid)").to_string());
    }
    for field in rules.fields() {
        let description = rules
            .rule(field)
            .map(|rule| rule.to_string())
            .unwrap_or_else(|| "custom predicate".to_string());
        output.push(format!("  {:<6} {}", colors::identifier(field), description));
    }
    output.push(
        colors::secondary("  fields without a rule accept any value").to_string(),
    );

    output.join("\n")
}
