//! Editing session: the current note and which surface has focus.

use chrono::{DateTime, Utc};

use crate::note::Note;

/// Which input surface receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Editor,
    CommandLine,
}

/// The note bound to the editor plus the focus target.
///
/// The current note is the session's own copy and may not be saved yet;
/// it is reconciled with the repository only by `:save`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Note>,
    focus: Focus,
}

impl Session {
    pub fn new(current: Option<Note>) -> Self {
        Self {
            current,
            focus: Focus::Editor,
        }
    }

    pub const fn current(&self) -> Option<&Note> {
        self.current.as_ref()
    }

    pub fn set_current(&mut self, note: Option<Note>) {
        self.current = note;
    }

    /// Replace the current note's content. No-op when there is none.
    pub fn update_content(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        if let Some(note) = self.current.as_mut() {
            note.set_content(text, now);
        }
    }

    pub const fn focus(&self) -> Focus {
        self.focus
    }

    pub const fn focus_editor(&mut self) {
        self.focus = Focus::Editor;
    }

    pub const fn focus_command_line(&mut self) {
        self.focus = Focus::CommandLine;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_update_content_bumps_timestamp() {
        let mut session = Session::new(Some(Note::new("n", start())));
        let later = start() + Duration::minutes(5);
        session.update_content("hello", later);
        let note = session.current().unwrap();
        assert_eq!(note.content, "hello");
        assert_eq!(note.updated_at, later);
    }

    #[test]
    fn test_update_content_without_note_is_noop() {
        let mut session = Session::default();
        session.update_content("ignored", start());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_focus_setters() {
        let mut session = Session::default();
        assert_eq!(session.focus(), Focus::Editor);
        session.focus_command_line();
        assert_eq!(session.focus(), Focus::CommandLine);
        session.focus_editor();
        assert_eq!(session.focus(), Focus::Editor);
    }
}
