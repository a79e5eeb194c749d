use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::command::CommandKind;
use crate::editor::EditorBuffer;
use crate::note::NoteId;
use crate::notepad::{Notepad, Submission};
use crate::session::Focus;
use crate::storage::MemoryStore;

/// Shown when the user types with nothing open.
pub const NO_NOTE_HINT: &str = "No note selected. Use :new <name> or :open <name>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// Notes, session, transcript and history
    pub notepad: Notepad,
    /// Editing buffer mirroring the current note's content
    pub editor: EditorBuffer,
    /// Scroll offset for the editor pane (line index of first visible line)
    pub editor_scroll_offset: usize,
    /// Note the editor buffer was loaded from
    editor_note: Option<NoteId>,
    /// Edits made since the current note was last saved, opened or created
    pub editor_dirty: bool,
    /// Text typed into the command line
    pub command_input: String,
    /// Terminal width
    pub width: u16,
    /// Terminal height
    pub height: u16,
    /// Whether help overlay is visible
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Notes file shown in help
    pub data_path: Option<PathBuf>,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Set after first quit attempt with unsaved editor changes; allows second quit to proceed
    pub quit_confirmed: bool,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    pub fn new(notepad: Notepad, terminal_size: (u16, u16)) -> Self {
        let mut model = Self {
            notepad,
            editor: EditorBuffer::empty(),
            editor_scroll_offset: 0,
            editor_note: None,
            editor_dirty: false,
            command_input: String::new(),
            width: terminal_size.0,
            height: terminal_size.1,
            help_visible: false,
            toast: None,
            data_path: None,
            config_global_path: None,
            config_local_path: None,
            quit_confirmed: false,
            should_quit: false,
        };
        model.sync_editor_to_current();
        model
    }

    pub const fn focus(&self) -> Focus {
        self.notepad.session().focus()
    }

    /// Reload the editor when the current note no longer matches it.
    ///
    /// A reloaded note opens at its first line. The cursor is kept when the
    /// session merely caught up with the buffer.
    pub fn sync_editor_to_current(&mut self) {
        let current = self.notepad.current();
        let id = current.map(|note| note.id.clone());
        let content = current.map_or("", |note| note.content.as_str());
        if id == self.editor_note && self.editor.text() == content {
            return;
        }
        self.editor = EditorBuffer::from_text(content);
        self.editor.move_to_start();
        self.editor_note = id;
        self.editor_scroll_offset = 0;
        self.ensure_cursor_visible();
    }

    /// Fold the result of a command-line submission back into the view state.
    pub fn apply_submission(&mut self, submission: &Submission) {
        if let Submission::Executed { kind, result } = submission
            && result.success
        {
            if matches!(kind, CommandKind::Save | CommandKind::Open | CommandKind::New) {
                self.editor_dirty = false;
            }
            // Saving over another entry swaps the id, not the text.
            if *kind == CommandKind::Save {
                self.editor_note = self.notepad.current().map(|note| note.id.clone());
            }
        }
        self.sync_editor_to_current();
        if self.notepad.current().is_none() {
            self.editor_dirty = false;
        }
        // The transcript may have grown and shortened the editor pane.
        self.ensure_cursor_visible();
    }

    /// Run a buffer mutation and forward the new text to the session.
    pub(super) fn edit(&mut self, op: impl FnOnce(&mut EditorBuffer) -> bool) {
        if self.notepad.current().is_none() {
            self.show_toast(ToastLevel::Info, NO_NOTE_HINT);
            return;
        }
        if op(&mut self.editor) {
            self.notepad.update_content(self.editor.text());
            self.editor_dirty = true;
        }
        self.ensure_cursor_visible();
    }

    /// Rows of note text the editor pane can show.
    pub fn editor_visible_rows(&self) -> usize {
        usize::from(crate::ui::editor_text_height(
            self.width,
            self.height,
            self.notepad.transcript().lines().len(),
            self.toast.is_some(),
        ))
    }

    /// Ensure the editor cursor line is visible in the pane.
    pub(super) fn ensure_cursor_visible(&mut self) {
        let cursor_line = self.editor.cursor().line;
        let visible_height = self.editor_visible_rows();
        if visible_height == 0 {
            self.editor_scroll_offset = cursor_line;
            return;
        }
        if cursor_line < self.editor_scroll_offset {
            self.editor_scroll_offset = cursor_line;
        } else if cursor_line >= self.editor_scroll_offset + visible_height {
            self.editor_scroll_offset = cursor_line + 1 - visible_height;
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(Notepad::open(MemoryStore::new(), false), (80, 24))
    }
}
