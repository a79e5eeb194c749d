use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Model;
use crate::markup;
use crate::session::Focus;
use crate::transcript::TranscriptEntry;

use super::{TRANSCRIPT_ROWS, overlays, status, style};

const NOTE_PLACEHOLDER: &str = "Start typing your note...";
const NO_NOTE_PLACEHOLDER: &str =
    "Create a new note with :new [name] or open an existing one with :open <name>";
const COMMAND_PLACEHOLDER: &str = "Enter command (try :help)";
const PROMPT: &str = "$ ";

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub editor: Rect,
    /// Empty while the transcript has nothing to show.
    pub transcript: Rect,
    pub command: Rect,
    /// Empty unless a toast is showing.
    pub toast: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect, transcript_lines: usize, toast_active: bool) -> ScreenLayout {
    // One row of border above the transcript lines.
    let transcript_height = if transcript_lines == 0 {
        0
    } else {
        u16::try_from(transcript_lines)
            .unwrap_or(u16::MAX)
            .min(TRANSCRIPT_ROWS)
            + 1
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(transcript_height),
            Constraint::Length(2),
            Constraint::Length(u16::from(toast_active)),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenLayout {
        header: chunks[0],
        editor: chunks[1],
        transcript: chunks[2],
        command: chunks[3],
        toast: chunks[4],
        status: chunks[5],
    }
}

/// Rows of note text visible inside the bordered editor pane.
pub fn editor_text_height(
    width: u16,
    height: u16,
    transcript_lines: usize,
    toast_active: bool,
) -> u16 {
    let layout = screen_layout(
        Rect::new(0, 0, width, height),
        transcript_lines,
        toast_active,
    );
    layout.editor.height.saturating_sub(2)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let _scope = crate::perf::scope("ui.render");
    let area = frame.area();
    let transcript = transcript_lines(model);
    let layout = screen_layout(area, transcript.len(), model.active_toast().is_some());

    render_header(frame, layout.header);
    render_editor(model, frame, layout.editor);
    if layout.transcript.height > 0 {
        render_transcript(&transcript, frame, layout.transcript);
    }
    render_command_line(model, frame, layout.command);
    if layout.toast.height > 0 {
        status::render_toast_bar(model, frame, layout.toast);
    }
    status::render_status_bar(model, frame, layout.status);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" \u{25cf}", Style::default().fg(Color::Red)),
        Span::styled(" \u{25cf}", Style::default().fg(Color::Yellow)),
        Span::styled(" \u{25cf}", Style::default().fg(Color::Green)),
        Span::raw("  terminal-notepad"),
    ]);
    let hints = Line::raw("Ctrl+K: command | Esc: editor | F1: help ");
    frame.render_widget(Paragraph::new(title).style(style::chrome_style()), area);
    frame.render_widget(
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .style(style::chrome_style()),
        area,
    );
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let focused = model.focus() == Focus::Editor;
    let current = model.notepad.current();
    let title = current.map_or_else(
        || " no note selected ".to_string(),
        |note| format!(" editing: {} ", note.name),
    );
    let block = Block::default()
        .title(Span::styled(title, style::accent_style()))
        .borders(Borders::ALL)
        .border_style(style::border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(note) = current else {
        frame.render_widget(
            Paragraph::new(Line::styled(NO_NOTE_PLACEHOLDER, style::dim_style())),
            inner,
        );
        return;
    };

    if note.content.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled(" ", style::cursor_style()));
        }
        spans.push(Span::styled(NOTE_PLACEHOLDER, style::dim_style()));
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
        return;
    }

    let buf = &model.editor;
    let cursor = buf.cursor();
    let visible_height = usize::from(inner.height);
    let start = model.editor_scroll_offset;
    let end = (start + visible_height).min(buf.line_count());

    let content: Vec<Line> = (start..end)
        .map(|line_idx| {
            let text = buf.line_at(line_idx).unwrap_or_default();
            if focused && line_idx == cursor.line {
                cursor_line(&text, cursor.col)
            } else if focused {
                Line::styled(text, style::text_style())
            } else {
                markup_line(&text)
            }
        })
        .collect();

    // Scroll sideways so the cursor column stays on screen.
    let h_offset = if focused {
        cursor
            .col
            .saturating_sub(usize::from(inner.width.saturating_sub(1)))
    } else {
        0
    };
    let paragraph =
        Paragraph::new(content).scroll((0, u16::try_from(h_offset).unwrap_or(u16::MAX)));
    frame.render_widget(paragraph, inner);
}

/// Split a line at a char column and draw a block cursor there.
fn cursor_line(text: &str, col: usize) -> Line<'static> {
    let split = text
        .char_indices()
        .nth(col)
        .map_or(text.len(), |(idx, _)| idx);
    let (before, rest) = text.split_at(split);
    let mut chars = rest.chars();
    let under = chars.next().map_or_else(|| " ".to_string(), String::from);
    let after = chars.as_str();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), style::text_style()));
    }
    spans.push(Span::styled(under, style::cursor_style()));
    if !after.is_empty() {
        spans.push(Span::styled(after.to_string(), style::text_style()));
    }
    Line::from(spans)
}

fn markup_line(text: &str) -> Line<'static> {
    let spans: Vec<Span> = markup::segments(text)
        .into_iter()
        .map(|segment| {
            Span::styled(
                segment.text.to_string(),
                style::style_for_markup(segment.kind),
            )
        })
        .collect();
    Line::from(spans)
}

/// Transcript as styled display lines, oldest first.
fn transcript_lines(model: &Model) -> Vec<Line<'static>> {
    model
        .notepad
        .transcript()
        .entries()
        .iter()
        .flat_map(|entry| {
            let line_style = match entry {
                TranscriptEntry::Input(_) => style::transcript_style(true, true),
                TranscriptEntry::Output { success, .. } => {
                    style::transcript_style(false, *success)
                }
                TranscriptEntry::Invalid => style::transcript_style(false, false),
            };
            entry
                .lines()
                .into_iter()
                .map(move |line| Line::styled(line, line_style))
        })
        .collect()
}

fn render_transcript(lines: &[Line<'static>], frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(style::border_style(false));
    let rows = usize::from(area.height.saturating_sub(1));
    let start = lines.len().saturating_sub(rows);
    let paragraph = Paragraph::new(lines[start..].to_vec()).block(block);
    frame.render_widget(paragraph, area);
}

fn render_command_line(model: &Model, frame: &mut Frame, area: Rect) {
    let focused = model.focus() == Focus::CommandLine;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(style::border_style(focused));

    let mut spans = vec![Span::styled(PROMPT, style::accent_style())];
    if !model.command_input.is_empty() {
        spans.push(Span::styled(
            model.command_input.clone(),
            style::text_style(),
        ));
    }
    if focused {
        spans.push(Span::styled(" ", style::cursor_style()));
    }
    if model.command_input.is_empty() {
        spans.push(Span::styled(COMMAND_PLACEHOLDER, style::dim_style()));
    }

    // Keep the end of a long input visible.
    let inner_width = usize::from(area.width);
    let input_width = PROMPT.len() + model.command_input.chars().count() + 1;
    let h_offset = input_width.saturating_sub(inner_width);
    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .scroll((0, u16::try_from(h_offset).unwrap_or(u16::MAX)));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_hides_empty_transcript_and_toast() {
        let layout = screen_layout(Rect::new(0, 0, 80, 24), 0, false);
        assert_eq!(layout.transcript.height, 0);
        assert_eq!(layout.toast.height, 0);
        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.editor.height, 24 - 1 - 2 - 1);
    }

    #[test]
    fn test_transcript_height_is_capped() {
        let layout = screen_layout(Rect::new(0, 0, 80, 40), 50, true);
        assert_eq!(layout.transcript.height, TRANSCRIPT_ROWS + 1);
        assert_eq!(layout.toast.height, 1);
    }

    #[test]
    fn test_editor_text_height_excludes_borders() {
        assert_eq!(editor_text_height(80, 24, 0, false), 24 - 1 - 2 - 1 - 2);
    }

    #[test]
    fn test_cursor_line_handles_multibyte_and_eol() {
        let line = cursor_line("café", 3);
        assert_eq!(line.spans[0].content, "caf");
        assert_eq!(line.spans[1].content, "é");

        let line = cursor_line("ab", 2);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, " ");
    }

    #[test]
    fn test_markup_line_drops_markers() {
        let line = markup_line("a **b** `c`");
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "a b c");
    }
}
