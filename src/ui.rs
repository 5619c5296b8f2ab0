//! Centralized UI formatting and color utilities
//!
//! This module provides the pass/fail colors and icons used by the
//! fieldgate CLI.

use colored::{ColoredString, Colorize};

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("FIELDGATE_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Disable colors when stdout is not a terminal.
pub fn init_colors() {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

/// Returns a colored icon for a pass/fail outcome.
///
/// Icons:
/// - pass: ✓ (green)
/// - fail: ✗ (red)
pub fn outcome_icon(passed: bool) -> ColoredString {
    if passed {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for passing counts
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for field names
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }

    /// `part/whole` as a percentage with one decimal, `0.0` for an empty whole
    pub fn percent(part: usize, whole: usize) -> String {
        if whole == 0 {
            "0.0".to_string()
        } else {
            format!("{:.1}", part as f64 * 100.0 / whole as f64)
        }
    }
}
