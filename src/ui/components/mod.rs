//! Reusable widgets for the browse screen.

pub mod tables;
pub mod tabs;

pub use tables::render_profile_table;
pub use tabs::{ControlBarContext, render_control_bar};
