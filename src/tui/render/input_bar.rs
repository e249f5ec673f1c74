use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const PROMPT: &str = " + ";

/// Render the new-task input line
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.entry_bg;
    let width = area.width as usize;
    let line = &app.input;
    let editing = app.mode == Mode::Input;

    let tag = format!(" [{}] ", line.priority);
    let tag_style = Style::default()
        .fg(app.theme.text)
        .bg(app.theme.priority_color(line.priority))
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(
        PROMPT,
        Style::default().fg(app.theme.highlight).bg(bg),
    )];
    if line.buffer.is_empty() && !editing {
        spans.push(Span::styled(
            "add a task (a)",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        let room = width.saturating_sub(PROMPT.len() + tag.len() + 1);
        spans.push(Span::styled(
            unicode::truncate_to_width(&line.buffer, room),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    // Right-align the priority tag
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let tag_width = unicode::display_width(&tag);
    if used + tag_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - tag_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(tag, tag_style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );

    if editing {
        let col = unicode::byte_offset_to_display_col(&line.buffer, line.cursor);
        let x = area.x + (PROMPT.len() + col).min(width.saturating_sub(1)) as u16;
        frame.set_cursor_position((x, area.y));
    }
}

/// Thin rule between the input line and the list
pub fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let rule = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(rule).style(Style::default().fg(app.theme.button_bg).bg(app.theme.background)),
        area,
    );
}
