use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Tasks", header_style)));
    for (key, desc) in [
        (" \u{2191}\u{2193}/jk", "Move cursor"),
        (" g/G", "Jump to top/bottom"),
        (" J/K", "Move task down/up"),
        (" Space/x", "Toggle done"),
        (" a/Enter", "Add tasks"),
        (" p", "Priority menu"),
        (" 1-3", "Set priority"),
        (" D/Del", "Remove completed"),
    ] {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" General", header_style)));
    for (key, desc) in [
        (" s", "Save"),
        (" r", "Refresh list"),
        (" ,", "Settings"),
        (" q", "Quit"),
    ] {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Mouse", header_style)));
    for (key, desc) in [
        (" \u{2630} drag", "Reorder"),
        (" \u{25C6} click", "Priority menu"),
        (" [ ] click", "Toggle done"),
    ] {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }

    let height = lines.len() as u16 + 2;
    let overlay = super::centered_rect(40, height, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" help ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 14;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
