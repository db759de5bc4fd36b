//! Interactive dashboard command (`groupdeck tui`)
//!
//! Launches the fullscreen group dashboard, optionally seeded from a
//! view-link query string.

use iocraft::prelude::*;

use crate::commands::build_directory;
use crate::config::Config;
use crate::error::{GroupdeckError, Result};
use crate::tui::Dashboard;
use crate::view_link::ViewLink;

/// Launch the interactive dashboard
pub async fn cmd_tui(view: Option<&str>, server: Option<&str>, demo: bool) -> Result<()> {
    let config = Config::load()?;
    let directory = build_directory(&config, server, demo)?;

    let initial = match view {
        Some(query) => ViewLink::decode(query),
        None => ViewLink {
            page_size: config.page_size(),
            ..Default::default()
        },
    };

    element!(Dashboard(
        directory: Some(directory),
        initial: initial,
    ))
    .fullscreen()
    .await
    .map_err(|e| GroupdeckError::Other(format!("TUI error: {e}")))
}
