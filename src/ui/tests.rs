use super::*;
use crate::app::{Message, Model, update};
use crate::notepad::Notepad;
use crate::storage::MemoryStore;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24);
    Terminal::new(backend).unwrap()
}

fn model_with_welcome(welcome: bool) -> Model {
    Model::new(Notepad::open(MemoryStore::new(), welcome), (80, 24))
}

fn submit(model: &mut Model, line: &str) {
    let submission = model.notepad.submit(line);
    model.apply_submission(&submission);
}

fn type_text(mut model: Model, text: &str) -> Model {
    for ch in text.chars() {
        model = update(model, Message::EditorInsertChar(ch));
    }
    model
}

fn draw(model: &Model) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|c| c.symbol()).collect()
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_welcome_note_renders_title_and_text() {
    let model = model_with_welcome(true);
    let terminal = draw(&model);

    assert!(row_text(&terminal, 1).contains("editing: welcome"));
    let content = screen_text(&terminal);
    assert!(content.contains("Welcome to termpad"));
}

#[test]
fn test_no_note_shows_placeholder() {
    let model = model_with_welcome(false);
    let content = screen_text(&draw(&model));

    assert!(content.contains("no note selected"));
    assert!(content.contains("Create a new note with :new"));
}

#[test]
fn test_empty_note_shows_typing_placeholder() {
    let mut model = model_with_welcome(false);
    submit(&mut model, ":new blank");
    let content = screen_text(&draw(&model));

    assert!(content.contains("editing: blank"));
    assert!(content.contains("Start typing your note..."));
}

#[test]
fn test_command_line_shows_prompt_and_placeholder() {
    let model = model_with_welcome(false);
    let content = screen_text(&draw(&model));
    assert!(content.contains("$ Enter command (try :help)"));
}

#[test]
fn test_command_input_replaces_placeholder() {
    let mut model = model_with_welcome(false);
    model = update(model, Message::FocusCommandLine);
    for ch in ":li".chars() {
        model = update(model, Message::CommandInput(ch));
    }
    let content = screen_text(&draw(&model));
    assert!(content.contains("$ :li"));
    assert!(!content.contains("Enter command"));
}

#[test]
fn test_transcript_keeps_latest_lines() {
    let mut model = model_with_welcome(false);
    submit(&mut model, ":help");
    let content = screen_text(&draw(&model));

    assert!(content.contains(":help - Show this help message"));
    assert!(!content.contains("> :help"));
}

#[test]
fn test_invalid_command_is_rendered() {
    let mut model = model_with_welcome(false);
    submit(&mut model, "hello");
    let content = screen_text(&draw(&model));

    assert!(content.contains("> hello"));
    assert!(content.contains("Invalid command. Type :help for available commands."));
}

#[test]
fn test_transcript_hidden_after_startup() {
    let model = model_with_welcome(false);
    let terminal = draw(&model);
    // Header, editor, command line, status: nothing between editor and command border.
    let layout = screen_layout(ratatui::layout::Rect::new(0, 0, 80, 24), 0, false);
    assert_eq!(layout.transcript.height, 0);
    assert!(row_text(&terminal, layout.command.y + 1).starts_with("$ "));
}

#[test]
fn test_status_text_without_current_note() {
    let model = model_with_welcome(false);
    assert_eq!(status_text(&model), " notes: 0");
}

#[test]
fn test_status_text_with_current_and_modified() {
    let mut model = model_with_welcome(false);
    submit(&mut model, ":new draft");
    submit(&mut model, ":save");
    let text = status_text(&model);
    assert!(text.starts_with(" notes: 1"));
    assert!(text.contains("current: draft"));
    assert!(text.contains("modified: "));
    assert!(!text.ends_with("[modified]"));

    let model = type_text(model, "x");
    assert!(status_text(&model).ends_with("[modified]"));
}

#[test]
fn test_status_bar_shows_version_on_the_right() {
    let model = model_with_welcome(false);
    let terminal = draw(&model);
    let status = row_text(&terminal, 23);
    assert!(status.starts_with(" notes: 0"));
    assert!(
        status
            .trim_end()
            .ends_with(&format!("termpad v{}", env!("CARGO_PKG_VERSION")))
    );
}

#[test]
fn test_help_overlay_lists_commands_and_files() {
    let mut model = model_with_welcome(false);
    model = update(model, Message::ToggleHelp);
    let content = screen_text(&draw(&model));

    assert!(content.contains("Help"));
    assert!(content.contains(":delete <name>"));
    assert!(content.contains("Delete a saved note"));
    assert!(content.contains("Notes: <in memory>"));
}

#[test]
fn test_toast_bar_renders_warning() {
    let mut model = model_with_welcome(false);
    submit(&mut model, ":new a");
    let model = type_text(model, "x");
    let model = update(model, Message::Quit);
    let content = screen_text(&draw(&model));
    assert!(content.contains("[warn] Unsaved changes!"));
}

#[test]
fn test_unfocused_editor_renders_markup_without_markers() {
    let mut model = model_with_welcome(false);
    submit(&mut model, ":new styled");
    let model = type_text(model, "**loud** words");

    let focused = screen_text(&draw(&model));
    assert!(focused.contains("**loud** words"));

    let model = update(model, Message::FocusCommandLine);
    let unfocused = screen_text(&draw(&model));
    assert!(unfocused.contains("loud words"));
    assert!(!unfocused.contains("**loud**"));
}

#[test]
fn test_focused_pane_has_accent_border() {
    let model = model_with_welcome(false);
    let terminal = draw(&model);
    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(0, 1)].fg, style::ACCENT);

    let model = update(model, Message::FocusCommandLine);
    let terminal = draw(&model);
    let buffer = terminal.backend().buffer();
    assert_ne!(buffer[(0, 1)].fg, style::ACCENT);
}
