//! Terminal rendering: coloured status lines, spinners and bordered panels.

pub mod panel;
mod terminal;

pub use terminal::{ConsoleSink, render_status};
