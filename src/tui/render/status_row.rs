use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let left = match (&app.status, app.mode) {
        (Some(msg), _) => Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        (None, _) if app.quit_pending => Span::styled(
            " unsaved changes: q again to quit, s to save",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        (None, mode) => Span::styled(mode_hint(mode), Style::default().fg(app.theme.dim).bg(bg)),
    };

    let done = app.store.tasks().iter().filter(|t| t.completed).count();
    let mut right = format!("{}/{} done", done, app.store.len());
    if app.store.is_dirty() {
        right.push_str(" [modified]");
    }
    right.push(' ');

    let mut spans = vec![left];
    let left_width = spans[0].content.chars().count();
    let right_width = right.chars().count();
    if left_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(right, Style::default().fg(app.theme.text).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn mode_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => " a add  space toggle  p priority  s save  ? help",
        Mode::Input => " Enter add  Tab priority  Esc done",
        Mode::PriorityMenu => " 1-3 pick  Enter choose  Esc cancel",
        Mode::Settings => " Tab field  Enter apply  Esc cancel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_tasks, render_to_string};

    #[test]
    fn shows_counts_and_hint() {
        let (_dir, mut app) = app_with_tasks(&["A", "B", "C"]);
        app.store.toggle_task(0).unwrap();
        let out = render_to_string(70, 1, |frame, area| render_status_row(frame, &app, area));
        assert!(out.starts_with(" a add"));
        assert!(out.ends_with("1/3 done [modified]"));
    }

    #[test]
    fn clean_store_has_no_marker() {
        let (_dir, app) = app_with_tasks(&["A"]);
        let out = render_to_string(70, 1, |frame, area| render_status_row(frame, &app, area));
        assert!(out.ends_with("0/1 done"));
    }

    #[test]
    fn status_message_replaces_hint() {
        let (_dir, mut app) = app_with_tasks(&["A"]);
        app.set_status("saved 1 tasks");
        let out = render_to_string(70, 1, |frame, area| render_status_row(frame, &app, area));
        assert!(out.starts_with(" saved 1 tasks"));
    }

    #[test]
    fn quit_prompt() {
        let (_dir, mut app) = app_with_tasks(&["A"]);
        app.quit_pending = true;
        let out = render_to_string(70, 1, |frame, area| render_status_row(frame, &app, area));
        assert!(out.starts_with(" unsaved changes"));
    }
}
