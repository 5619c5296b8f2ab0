//! Command module structure for fieldgate CLI

use anyhow::Result;
use std::path::Path;

use fieldgate::config::Config;

pub mod check;
pub mod init;
pub mod rules;
pub mod util;

/// Load the config named on the command line, or the project default.
///
/// An explicit path must exist; the project default falls back to the
/// built-in passport schema when absent.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
