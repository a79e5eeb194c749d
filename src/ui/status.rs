use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;

use super::style;

const SEPARATOR: &str = " \u{2022} ";

/// Left side of the status bar: note count and the current note.
pub fn status_text(model: &Model) -> String {
    let mut parts = vec![format!("notes: {}", model.notepad.repository().len())];
    if let Some(note) = model.notepad.current() {
        parts.push(format!("current: {}", note.name));
        let modified = note
            .updated_at
            .with_timezone(&Local)
            .format("%b %d, %H:%M");
        parts.push(format!("modified: {modified}"));
    }
    let mut text = format!(" {}", parts.join(SEPARATOR));
    if model.editor_dirty {
        text.push_str(" [modified]");
    }
    text
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let left = status_text(model);
    let right = format!("termpad v{} ", env!("CARGO_PKG_VERSION"));
    let width = usize::from(area.width);
    let gap = width.saturating_sub(left.width() + right.width());
    let status = if gap == 0 {
        left
    } else {
        format!("{left}{}{right}", " ".repeat(gap))
    };

    let status_bar = Paragraph::new(status).style(style::status_style());
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, toast_style) = style::toast_style(level);
    let toast = Paragraph::new(format!("{prefix} {message}")).style(toast_style);
    frame.render_widget(toast, area);
}
