//! CLI argument definitions for fieldgate.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use fieldgate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "fieldgate")]
#[command(version)]
#[command(about = "Two-phase validation of key/value records", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    fieldgate check passports.txt     Count records passing each phase\n    fieldgate rules                   Show the active schema and rules\n    fieldgate init                    Write .fieldgate/config.md to customise them"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a batch of records and print per-phase counts
    ///
    /// Records are separated by blank lines; each record is a list of
    /// whitespace-separated key:value tokens.
    Check {
        /// Record batch file ('-' reads stdin)
        input: PathBuf,
        /// Config file (default: .fieldgate/config.md, or the built-in passport schema)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Output format (overrides check.format from config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// List every failing record with its missing and invalid fields
        #[arg(short, long)]
        verbose: bool,
        /// Exit with status 1 if any record fails validation
        #[arg(long)]
        strict: bool,
    },
    /// Show the required fields and rule table in effect
    Rules {
        /// Config file (default: .fieldgate/config.md, or the built-in passport schema)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Write a default .fieldgate/config.md in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    Man {
        /// Output directory for the man page (default: current directory)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}
