//! Editing surface for the current note.
//!
//! A rope-backed buffer with a cursor. The buffer is rebuilt whenever the
//! current note changes and its full text is pushed back into the session
//! after every edit.

mod buffer;

pub use buffer::{Cursor, Direction, EditorBuffer, TAB_WIDTH};
