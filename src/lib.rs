//! Core crate exports for building and running the `vitrin` terminal interface.
//!
//! The root module primarily re-exports types from the catalog, query, share,
//! and UI subsystems so that embedders can assemble a browse session without
//! digging through the module hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod query;
pub mod share;
pub mod tui;
pub mod ui;

pub use catalog::{Catalog, CatalogError, Profile, ProfileId, load_catalog, sample_catalog};
pub use query::{Controls, SortOrder};
pub use share::{
    Clipboard, ShareAction, ShareResolution, ShareRuntime, ShareSheet, SystemClipboard,
    sheet_from_command,
};
pub use tui::theme::{Theme, default_theme, theme_or_default};
pub use ui::{BrowseOutcome, BrowseState, CodeRenderer, run};
