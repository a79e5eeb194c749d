//! Theming and color definitions.
//!
//! Uses ANSI colors that adapt to the terminal's color palette. The look
//! is a dark terminal: green prompts, gray text, dim placeholders.

use ratatui::style::{Color, Modifier, Style};

use crate::app::ToastLevel;
use crate::markup::MarkupKind;

pub const ACCENT: Color = Color::Green;
pub const TEXT: Color = Color::Gray;
pub const DIM: Color = Color::Indexed(242);
pub const CHROME_BG: Color = Color::Indexed(235);

/// Style for a run of inline markup in the unfocused editor.
pub fn style_for_markup(kind: MarkupKind) -> Style {
    let base = Style::default().fg(TEXT);
    match kind {
        MarkupKind::Plain => base,
        MarkupKind::Bold => base.add_modifier(Modifier::BOLD),
        MarkupKind::Italic => base.add_modifier(Modifier::ITALIC),
        MarkupKind::Code => Style::default().fg(Color::Yellow).bg(Color::Indexed(236)),
    }
}

pub fn text_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn dim_style() -> Style {
    Style::default().fg(DIM)
}

pub fn accent_style() -> Style {
    Style::default().fg(ACCENT)
}

/// Block-style fake cursor.
pub fn cursor_style() -> Style {
    Style::default().bg(ACCENT).fg(Color::Black)
}

/// Pane borders light up while the pane has focus.
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Transcript line style: echoed input is green, failures stand out.
pub fn transcript_style(is_input: bool, success: bool) -> Style {
    if is_input {
        accent_style()
    } else if success {
        text_style()
    } else {
        Style::default().fg(Color::Yellow)
    }
}

pub fn chrome_style() -> Style {
    Style::default().bg(CHROME_BG).fg(DIM)
}

pub fn status_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn toast_style(level: ToastLevel) -> (&'static str, Style) {
    match level {
        ToastLevel::Info => ("[info]", status_style()),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_styles_are_distinct() {
        let bold = style_for_markup(MarkupKind::Bold);
        let italic = style_for_markup(MarkupKind::Italic);
        assert!(bold.add_modifier.contains(Modifier::BOLD));
        assert!(italic.add_modifier.contains(Modifier::ITALIC));
        assert_ne!(style_for_markup(MarkupKind::Code), style_for_markup(MarkupKind::Plain));
    }

    #[test]
    fn test_failed_output_differs_from_success() {
        assert_ne!(transcript_style(false, false), transcript_style(false, true));
        assert_eq!(transcript_style(true, false), accent_style());
    }
}
