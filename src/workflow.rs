use anyhow::Result;
use vitrin::{
    BrowseOutcome, BrowseState, Catalog, Controls, ShareRuntime, SystemClipboard, Theme,
    default_theme, load_catalog, sample_catalog, sheet_from_command, theme_or_default, ui,
};

use crate::settings::{CatalogSource, ResolvedConfig};

/// Coordinates building and running the interactive browse experience.
pub(crate) struct BrowseWorkflow {
    catalog: Catalog,
    controls: Controls,
    theme: Theme,
    title: String,
    share_command: Vec<String>,
    osc52: bool,
}

impl BrowseWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let catalog = match &config.catalog {
            CatalogSource::Sample => {
                log::debug!("using the built-in sample catalog");
                sample_catalog()
            }
            CatalogSource::File(path) => {
                log::debug!("loading catalog from {}", path.display());
                load_catalog(path)?
            }
        };
        log::debug!(
            "catalog holds {} profiles; starting with sort '{}' in category '{}'",
            catalog.len(),
            config.controls.sort,
            config.controls.category
        );
        let theme = match config.theme.as_deref() {
            Some(name) => theme_or_default(name),
            None => default_theme(),
        };

        Ok(Self {
            catalog,
            controls: config.controls,
            theme,
            title: config.title,
            share_command: config.share_command,
            osc52: config.osc52,
        })
    }

    pub(crate) fn run(self) -> Result<BrowseOutcome> {
        let share = ShareRuntime::start(
            Box::new(SystemClipboard::new(self.osc52)),
            sheet_from_command(&self.share_command),
        );
        let mut state =
            BrowseState::new(self.catalog, self.controls, share, self.theme, self.title);
        ui::run(&mut state)
    }
}
