//! CLI entry point and command handlers for fieldgate.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("FIELDGATE_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();
}

fn main() -> Result<()> {
    init_logging();
    fieldgate::ui::init_colors();

    let cli = Cli::parse();
    if cli.quiet {
        std::env::set_var("FIELDGATE_QUIET", "1");
    }

    match cli.command {
        Commands::Check {
            input,
            config,
            format,
            verbose,
            strict,
        } => cmd::check::cmd_check(&input, config.as_deref(), format, verbose, strict),
        Commands::Rules { config } => cmd::rules::cmd_rules(config.as_deref()),
        Commands::Init { force } => cmd::init::cmd_init(force),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
        Commands::Man { out_dir } => cmd::util::cmd_man(out_dir.as_ref()),
    }
}
