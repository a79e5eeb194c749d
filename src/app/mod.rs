//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, NO_NOTE_HINT, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    data_dir: PathBuf,
    welcome: bool,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application storing notes under `data_dir`.
    pub const fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            welcome: true,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Seed the welcome note when no notes are saved yet.
    pub const fn with_welcome(mut self, enabled: bool) -> Self {
        self.welcome = enabled;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}
