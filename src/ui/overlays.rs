use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;
use crate::command::CommandKind;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let data_path = model
        .data_path
        .as_ref()
        .map_or_else(|| "<in memory>".to_string(), |p| p.display().to_string());
    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Commands", section_style));
    for kind in CommandKind::ALL {
        lines.push(Line::raw(format!(
            "  {:<20}{}",
            command_usage(kind),
            command_summary(kind)
        )));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled("Files", section_style));
    lines.push(Line::raw(format!("  Notes: {data_path}")));
    lines.push(Line::raw(format!("  Global config: {global_cfg}")));
    lines.push(Line::raw(format!("  Local override: {local_cfg}")));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Keys", section_style));
    lines.push(Line::raw("  Ctrl+K              Focus command line"));
    lines.push(Line::raw("  Esc                 Focus editor"));
    lines.push(Line::raw("  Up / Down           Command history"));
    lines.push(Line::raw("  Tab                 Indent two spaces"));
    lines.push(Line::raw("  Ctrl+Home/End       Note start / end"));
    lines.push(Line::raw("  Ctrl+Q / Ctrl+C     Quit"));
    lines.push(Line::raw("  F1                  Toggle help"));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );

    // Reserve 1 row at bottom for footer hint
    let content_height = inner.height.saturating_sub(1);
    let visible: Vec<Line> = lines
        .into_iter()
        .take(usize::from(content_height))
        .collect();
    let content_area = Rect::new(inner.x, inner.y, inner.width, content_height);
    frame.render_widget(Paragraph::new(visible), content_area);

    let footer_area = Rect::new(inner.x, inner.y + content_height, inner.width, 1);
    let footer = Line::styled("any key closes", dim_style);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

const fn command_usage(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Save => ":save [name]",
        CommandKind::Open => ":open <name>",
        CommandKind::Delete => ":delete <name>",
        CommandKind::List => ":list",
        CommandKind::New => ":new [name]",
        CommandKind::Help => ":help",
        CommandKind::Clear => ":clear",
    }
}

const fn command_summary(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Save => "Save the current note",
        CommandKind::Open => "Open a saved note",
        CommandKind::Delete => "Delete a saved note",
        CommandKind::List => "List saved notes",
        CommandKind::New => "Start a new note",
        CommandKind::Help => "Show command help",
        CommandKind::Clear => "Clear the output",
    }
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
