//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`render`]: Screen layout and the editor, transcript and command panes
//! - [`style`]: Theming and colors

pub mod style;

mod overlays;
mod render;
mod status;

pub use render::{ScreenLayout, editor_text_height, render, screen_layout};
pub use status::status_text;

/// Transcript lines kept on screen; older output scrolls away.
pub const TRANSCRIPT_ROWS: u16 = 8;

#[cfg(test)]
mod tests;
