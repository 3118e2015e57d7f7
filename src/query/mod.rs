//! User-adjustable controls and the view derivation built on them.

pub mod controls;
pub mod pipeline;

pub use controls::{Controls, SortOrder};
pub use pipeline::{updated_stamp, visible_rows};
