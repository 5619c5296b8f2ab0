//! Initialize fieldgate in a project directory
//!
//! Writes `.fieldgate/config.md` holding the built-in passport schema and
//! rules, ready to be edited.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use fieldgate::config::Config;
use fieldgate::paths::{CONFIG_DIR, CONFIG_FILE};
use fieldgate::ui;

pub fn cmd_init(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            config_path.display()
        );
    }

    fs::create_dir_all(CONFIG_DIR)
        .with_context(|| format!("Failed to create {}", CONFIG_DIR))?;

    let content = Config::default().render()?;
    fs::write(config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!(path = CONFIG_FILE, force, "wrote default config");
    if !ui::is_quiet() {
        println!("{} Created {}", "✓".green(), CONFIG_FILE.cyan());
    }
    Ok(())
}
