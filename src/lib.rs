// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. command::CommandKind)
    clippy::module_name_repetitions
)]

//! # termpad
//!
//! A minimalist notepad styled as a computer terminal.
//!
//! termpad gives you:
//! - One editable note at a time
//! - A colon-prefixed command line (`:save`, `:open`, `:list`, ...)
//! - Notes persisted as a JSON blob in a data directory
//! - Light inline markup (`**bold**`, `*italic*`, `` `code` ``)
//!
//! ## Architecture
//!
//! The core is a pure command interpreter: a parsed [`command::Command`] is
//! executed against the saved notes and the current note, producing a result
//! message and a list of [`command::Effect`]s. The [`notepad::Notepad`]
//! applies those effects to the repository, session and transcript.
//!
//! The terminal front end uses The Elm Architecture (TEA):
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`command`]: Command parsing and execution
//! - [`notepad`]: Repository, session, transcript and history wired together
//! - [`repo`]: Saved notes backed by a [`storage::BlobStore`]
//! - [`editor`]: Text buffer for the current note
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod command;
pub mod config;
pub mod editor;
pub mod markup;
pub mod note;
pub mod notepad;
pub mod perf;
pub mod repo;
pub mod session;
pub mod storage;
pub mod transcript;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::command::{Command, CommandKind, CommandResult, parse};
    pub use crate::note::Note;
    pub use crate::notepad::{Notepad, Submission};
    pub use crate::storage::{BlobStore, FileStore, MemoryStore};
}
