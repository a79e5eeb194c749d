use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::session::Focus;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Paste(text) => Some(Message::Paste(text.clone())),
            Event::Resize(width, height) => {
                crate::perf::log_event("event.resize", format!("width={width} height={height}"));
                Some(Message::Resize(*width, *height))
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('q' | 'c') if ctrl => return Some(Message::Quit),
            KeyCode::F(1) => return Some(Message::ToggleHelp),
            _ => {}
        }

        // Any other key dismisses the help overlay.
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        match key.code {
            KeyCode::Char('k') if ctrl => return Some(Message::FocusCommandLine),
            KeyCode::Esc => return Some(Message::FocusEditor),
            _ => {}
        }

        match model.focus() {
            Focus::Editor => Self::handle_editor_key(key, model),
            Focus::CommandLine => Self::handle_command_key(key),
        }
    }

    fn handle_command_key(key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Enter => Some(Message::SubmitCommand),
            KeyCode::Backspace => Some(Message::CommandBackspace),
            KeyCode::Up => Some(Message::HistoryPrev),
            KeyCode::Down => Some(Message::HistoryNext),
            KeyCode::Char('u') if ctrl => Some(Message::CommandClear),
            KeyCode::Char(ch) if !ctrl && !alt => Some(Message::CommandInput(ch)),
            _ => None,
        }
    }

    fn handle_editor_key(key: KeyEvent, model: &Model) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let page = model.editor_visible_rows().max(1);
        match key.code {
            KeyCode::Enter => Some(Message::EditorSplitLine),
            KeyCode::Tab => Some(Message::EditorInsertTab),
            KeyCode::Backspace => Some(Message::EditorDeleteBack),
            KeyCode::Delete => Some(Message::EditorDeleteForward),
            KeyCode::Up => Some(Message::EditorMoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::EditorMoveCursor(Direction::Down)),
            KeyCode::Left => Some(Message::EditorMoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::EditorMoveCursor(Direction::Right)),
            KeyCode::Home if ctrl => Some(Message::EditorMoveToStart),
            KeyCode::End if ctrl => Some(Message::EditorMoveToEnd),
            KeyCode::Home => Some(Message::EditorMoveHome),
            KeyCode::End => Some(Message::EditorMoveEnd),
            KeyCode::PageUp => Some(Message::EditorScrollUp(page)),
            KeyCode::PageDown => Some(Message::EditorScrollDown(page)),
            KeyCode::Char(ch) if !ctrl && !alt => Some(Message::EditorInsertChar(ch)),
            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
