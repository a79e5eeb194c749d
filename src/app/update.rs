use crate::app::{Model, ToastLevel};
use crate::editor::{Direction, EditorBuffer};
use crate::session::Focus;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Focus
    /// Move keyboard focus to the editor
    FocusEditor,
    /// Move keyboard focus to the command line
    FocusCommandLine,

    // Command line
    /// Append a character to the command input
    CommandInput(char),
    /// Delete the last character of the command input
    CommandBackspace,
    /// Discard the command input
    CommandClear,
    /// Submit the command input (handled in effects)
    SubmitCommand,
    /// Recall an older history entry
    HistoryPrev,
    /// Recall a newer history entry
    HistoryNext,

    // Editor
    /// Insert a character at the cursor
    EditorInsertChar(char),
    /// Insert indentation (Tab)
    EditorInsertTab,
    /// Delete character before cursor (Backspace)
    EditorDeleteBack,
    /// Delete character at cursor (Delete)
    EditorDeleteForward,
    /// Split line at cursor (Enter)
    EditorSplitLine,
    /// Move cursor in a direction
    EditorMoveCursor(Direction),
    /// Move cursor to beginning of line (Home)
    EditorMoveHome,
    /// Move cursor to end of line (End)
    EditorMoveEnd,
    /// Move cursor to start of buffer (Ctrl+Home)
    EditorMoveToStart,
    /// Move cursor to end of buffer (Ctrl+End)
    EditorMoveToEnd,
    /// Scroll editor viewport up by n lines
    EditorScrollUp(usize),
    /// Scroll editor viewport down by n lines
    EditorScrollDown(usize),

    /// Bracketed paste, routed to whichever pane has focus
    Paste(String),

    // Overlays
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// Command submission touches storage, so it is left to the side-effect
/// handler; everything else happens here.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Reset the confirmation flag on any action other than the confirmed one.
    if !matches!(msg, Message::Quit) {
        model.quit_confirmed = false;
    }

    match msg {
        Message::FocusEditor => model.notepad.session_mut().focus_editor(),
        Message::FocusCommandLine => model.notepad.session_mut().focus_command_line(),

        Message::CommandInput(ch) => model.command_input.push(ch),
        Message::CommandBackspace => {
            model.command_input.pop();
        }
        Message::CommandClear => model.command_input.clear(),
        Message::HistoryPrev => {
            if let Some(line) = model.notepad.history_mut().prev() {
                model.command_input = line.to_string();
            }
        }
        Message::HistoryNext => {
            if let Some(line) = model.notepad.history_mut().next() {
                model.command_input = line.to_string();
            }
        }

        Message::EditorInsertChar(ch) => model.edit(|buf| buf.insert_char(ch)),
        Message::EditorInsertTab => model.edit(EditorBuffer::insert_tab),
        Message::EditorDeleteBack => model.edit(EditorBuffer::delete_back),
        Message::EditorDeleteForward => model.edit(EditorBuffer::delete_forward),
        Message::EditorSplitLine => model.edit(EditorBuffer::split_line),
        Message::EditorMoveCursor(dir) => {
            model.editor.move_cursor(dir);
            model.ensure_cursor_visible();
        }
        Message::EditorMoveHome => model.editor.move_home(),
        Message::EditorMoveEnd => model.editor.move_end(),
        Message::EditorMoveToStart => {
            model.editor.move_to_start();
            model.ensure_cursor_visible();
        }
        Message::EditorMoveToEnd => {
            model.editor.move_to_end();
            model.ensure_cursor_visible();
        }
        Message::EditorScrollUp(n) => {
            model.editor_scroll_offset = model.editor_scroll_offset.saturating_sub(n);
        }
        Message::EditorScrollDown(n) => {
            let max = model.editor.line_count().saturating_sub(1);
            model.editor_scroll_offset = (model.editor_scroll_offset + n).min(max);
        }

        Message::Paste(text) => match model.focus() {
            Focus::Editor => {
                let text = normalize_paste(&text);
                model.edit(|buf| buf.insert_str(&text));
            }
            Focus::CommandLine => {
                let first_line = text.lines().next().unwrap_or_default();
                model.command_input.push_str(first_line);
            }
        },

        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // SubmitCommand: handled in effects
        Message::SubmitCommand => {}

        // Window
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
            model.ensure_cursor_visible();
        }

        // Application
        Message::Quit => {
            if model.editor_dirty && !model.quit_confirmed {
                model.show_toast(
                    ToastLevel::Warning,
                    "Unsaved changes! Press Ctrl+Q again to quit, or :save to keep them",
                );
                model.quit_confirmed = true;
            } else {
                model.should_quit = true;
            }
        }
    }
    model
}

/// Line endings become `\n` and tabs become editor indentation.
fn normalize_paste(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', &" ".repeat(crate::editor::TAB_WIDTH))
}
