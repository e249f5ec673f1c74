use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::task::Priority;
use crate::tui::app::{App, SWATCH_COLS};

const MENU_WIDTH: u16 = 14;
const MENU_HEIGHT: u16 = Priority::ALL.len() as u16 + 2;

/// Render the priority menu next to the row it was opened from, and
/// remember where it landed for mouse hits.
pub fn render_priority_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(menu) = app.priority_menu else {
        return;
    };

    // Drop down from the swatch of the task's row, or center if it scrolled away
    let anchor = app
        .rows
        .iter()
        .find(|r| r.index == menu.index)
        .map(|r| (r.x + SWATCH_COLS.start, r.extent.bottom));
    let menu_area = match anchor {
        Some((x, y)) => place_below(x, y, area),
        None => super::centered_rect(MENU_WIDTH, MENU_HEIGHT, area),
    };

    frame.render_widget(Clear, menu_area);

    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" priority ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let inner_width = MENU_WIDTH.saturating_sub(2) as usize;
    let lines: Vec<Line> = Priority::ALL
        .iter()
        .enumerate()
        .map(|(i, priority)| {
            let marker = if i == menu.selected { "\u{25B6}" } else { " " }; // ▶
            let label = format!("{}{} {}", marker, i + 1, priority.label());
            let pad = inner_width.saturating_sub(label.chars().count());
            let mut style = Style::default()
                .fg(app.theme.text)
                .bg(app.theme.priority_color(*priority));
            if i == menu.selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(format!("{}{}", label, " ".repeat(pad)), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), menu_area);
    app.menu_area = Some(menu_area);
}

/// A menu rect with its top-left at (x, y), pushed back inside `area`
fn place_below(x: u16, y: u16, area: Rect) -> Rect {
    let width = MENU_WIDTH.min(area.width);
    let height = MENU_HEIGHT.min(area.height);
    let max_x = area.x + area.width - width;
    let max_y = area.y + area.height - height;
    Rect {
        x: x.clamp(area.x, max_x),
        y: y.clamp(area.y, max_y),
        width,
        height,
    }
}
