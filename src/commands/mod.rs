//! Command implementations for the groupdeck CLI.

mod config;
mod ls;
mod tui;

pub use config::{cmd_config_get, cmd_config_path, cmd_config_set};
pub use ls::{LsOptions, cmd_ls};
pub use tui::cmd_tui;

use std::sync::Arc;

use crate::config::Config;
use crate::directory::SharedDirectory;
use crate::directory::http::HttpDirectory;
use crate::directory::memory::MemoryDirectory;
use crate::error::Result;

/// Build the directory backend from the CLI flags and the config file.
///
/// `--demo` wins over everything; `--server` overrides the configured URL
/// but keeps the configured timeout.
fn build_directory(config: &Config, server: Option<&str>, demo: bool) -> Result<SharedDirectory> {
    if demo {
        return Ok(Arc::new(MemoryDirectory::demo()));
    }

    let directory = match server {
        Some(url) => HttpDirectory::new(url, config.timeout())?,
        None => HttpDirectory::from_config(config)?,
    };
    Ok(Arc::new(directory))
}
