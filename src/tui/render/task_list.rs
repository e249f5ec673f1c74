use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::{Priority, Task};
use crate::ops::RowExtent;
use crate::tui::app::{App, CHECKBOX_COLS, Mode, RowLayout};
use crate::tui::theme::Theme;
use crate::util::unicode;

const HANDLE: &str = "\u{2630} "; // ☰
const SWATCH: &str = " \u{25C6} "; // ◆

/// Render the task rows and record where each one landed
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    app.rows.clear();
    app.clamp_cursor();

    if app.store.is_empty() {
        let empty = Paragraph::new(" No tasks. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor on screen
    let visible_height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
    let scroll = app.scroll_offset.min(app.store.len().saturating_sub(1));
    let end = app.store.len().min(scroll + visible_height);

    let show_cursor = app.mode != Mode::Input;
    let drop_row = if app.drag.is_dragging() {
        app.drag_hover
    } else {
        None
    };

    let mut lines: Vec<Line> = Vec::with_capacity(end - scroll);
    for (offset, index) in (scroll..end).enumerate() {
        let y = area.y + offset as u16;
        app.rows.push(RowLayout {
            index,
            extent: RowExtent::new(y, y + 1),
            x: area.x,
        });
        let task = &app.store.tasks()[index];
        lines.push(task_line(
            task,
            &app.theme,
            area.width as usize,
            show_cursor && index == app.cursor,
            drop_row == Some(y),
        ));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// One row: handle, priority swatch, checkbox, text, tinted by priority
fn task_line<'a>(
    task: &'a Task,
    theme: &Theme,
    width: usize,
    is_cursor: bool,
    is_drop_target: bool,
) -> Line<'a> {
    let bg = theme.priority_color(task.priority);
    let base = Style::default().fg(theme.text).bg(bg);

    let handle_style = if is_cursor {
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    let swatch_style = match task.priority {
        Priority::Normal => Style::default().fg(theme.dim).bg(bg),
        Priority::Medium | Priority::High => base.add_modifier(Modifier::BOLD),
    };
    let checkbox = if task.completed { "[x] " } else { "[ ] " };

    let mut text_style = if task.completed {
        Style::default()
            .fg(theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        base
    };
    if is_cursor {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let prefix = HANDLE.chars().count() + SWATCH.chars().count() + CHECKBOX_COLS.len();
    let room = width.saturating_sub(prefix);
    let text = unicode::truncate_to_width(&task.text, room);
    let pad = room.saturating_sub(unicode::display_width(&text));

    let mut line = Line::from(vec![
        Span::styled(HANDLE, handle_style),
        Span::styled(SWATCH, swatch_style),
        Span::styled(checkbox, base),
        Span::styled(text, text_style),
        Span::styled(" ".repeat(pad), base),
    ]);
    if is_drop_target {
        line = line.patch_style(Style::default().add_modifier(Modifier::UNDERLINED));
    }
    line
}
