//! UI module for the quiz TUI

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;
