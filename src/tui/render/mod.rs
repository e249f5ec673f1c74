pub mod help_overlay;
pub mod input_bar;
pub mod priority_menu;
pub mod settings_overlay;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: input line | separator | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // input line
            Constraint::Length(1), // separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    input_bar::render_input_bar(frame, app, chunks[0]);
    input_bar::render_separator(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);

    // Overlays on top of the list
    app.menu_area = None;
    match app.mode {
        Mode::PriorityMenu => priority_menu::render_priority_menu(frame, app, chunks[2]),
        Mode::Settings => settings_overlay::render_settings_overlay(frame, app, area),
        _ => {}
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[3]);
}

/// Create a centered rectangle of the given size, clipped to the parent
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
