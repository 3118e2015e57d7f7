//! Terminal building blocks: the input pump and the theme registry.

pub mod input;
pub mod theme;

pub use input::{UiEvent, spawn_input_thread};
pub use theme::Theme;
