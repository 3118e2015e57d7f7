//! Interactive terminal UI for browsing and sharing the catalog.
//!
//! [`state`] owns the screen state, [`runtime`] drives the event loop,
//! and [`card`] holds the share-card overlay with its code-rendering
//! seam. The widgets live under [`components`].

mod actions;
pub mod card;
pub mod components;
mod render;
mod runtime;
pub mod state;

pub use card::{CodeRenderer, ShareCard, TextCode};
pub use runtime::run;
pub use state::{BrowseOutcome, BrowseState, Notice, NoticeLevel};
