//! Route `log` records into the in-app log pane.
//!
//! Records are collected by `tui-logger` and stay off stdout and stderr,
//! which the terminal UI owns while it runs. The pane itself is drawn by
//! the UI layer when toggled on.

use anyhow::{Context, Result};
use log::LevelFilter;

/// Install the log collector with `level` as the capture ceiling.
///
/// Must run before the first `log` call whose record should reach the
/// pane; records emitted earlier are dropped by the `log` facade.
pub fn initialize(level: LevelFilter) -> Result<()> {
    tui_logger::init_logger(level).context("failed to install the log collector")?;
    tui_logger::set_default_level(level);
    Ok(())
}
