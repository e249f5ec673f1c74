use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::settings::{FONT_FAMILIES, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::tui::app::{App, SettingsField};
use crate::tui::theme::Theme;

/// Font entries shown at once
const FONT_WINDOW: usize = 5;

/// Render the settings dialog over the draft being edited. The preview
/// row uses the draft's theme so dark mode can be judged before applying.
pub fn render_settings_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(draft) = &app.settings_draft else {
        return;
    };
    let overlay = super::centered_rect(44, FONT_WINDOW as u16 + 9, area);
    frame.render_widget(Clear, overlay);

    let theme = &app.theme;
    let bg = theme.background;
    let label_style = |field: SettingsField| {
        if draft.field == field {
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(bg)
        }
    };
    let dim = Style::default().fg(theme.dim).bg(bg);
    let text = Style::default().fg(theme.text).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        " Font family",
        label_style(SettingsField::FontFamily),
    )));

    // Scroll the font list so the highlighted entry stays in view
    let start = draft
        .font_cursor
        .saturating_sub(FONT_WINDOW / 2)
        .min(FONT_FAMILIES.len().saturating_sub(FONT_WINDOW));
    for (i, family) in FONT_FAMILIES.iter().enumerate().skip(start).take(FONT_WINDOW) {
        let chosen = *family == draft.settings.font_family;
        let marker = if chosen { "\u{25CF}" } else { " " }; // ●
        let style = if i == draft.font_cursor && draft.field == SettingsField::FontFamily {
            text.add_modifier(Modifier::REVERSED)
        } else {
            text
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", marker), text),
            Span::styled(family.to_string(), style),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(" Font size   ", label_style(SettingsField::FontSize)),
        Span::styled(format!("- {:>2} +", draft.settings.font_size), text),
        Span::styled(format!("  ({}-{})", MIN_FONT_SIZE, MAX_FONT_SIZE), dim),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Dark mode   ", label_style(SettingsField::DarkMode)),
        Span::styled(
            if draft.settings.dark_mode { "[x]" } else { "[ ]" },
            text,
        ),
    ]));
    lines.push(Line::from(""));

    let preview = Theme::from_settings(&draft.settings);
    lines.push(Line::from(Span::styled(
        " Preview: a normal task ",
        Style::default().fg(preview.text).bg(preview.normal_row),
    )));
    lines.push(Line::from(Span::styled(
        " Enter apply  Esc cancel  Tab next",
        dim,
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" settings ")
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::open_settings;
    use crate::tui::render::test_helpers::{app_with_tasks, render_app};

    #[test]
    fn shows_draft_values() {
        let (_dir, mut app) = app_with_tasks(&[]);
        open_settings(&mut app);
        if let Some(draft) = app.settings_draft.as_mut() {
            draft.settings.font_size = 14;
            draft.settings.dark_mode = true;
        }
        let out = render_app(&mut app, 60, 20);
        assert!(out.contains(" settings "));
        assert!(out.contains("\u{25CF} TkDefaultFont"));
        assert!(out.contains("- 14 +"));
        assert!(out.contains("Dark mode   [x]"));
        // Store untouched until applied
        assert_eq!(app.store.settings().font_size, 10);
    }

    #[test]
    fn font_window_follows_cursor() {
        let (_dir, mut app) = app_with_tasks(&[]);
        open_settings(&mut app);
        if let Some(draft) = app.settings_draft.as_mut() {
            draft.font_cursor = FONT_FAMILIES.len() - 1;
        }
        let out = render_app(&mut app, 60, 20);
        assert!(out.contains(FONT_FAMILIES[FONT_FAMILIES.len() - 1]));
        assert!(!out.contains(FONT_FAMILIES[0]));
    }

    #[test]
    fn nothing_without_draft() {
        let (_dir, app) = app_with_tasks(&[]);
        let out = crate::tui::render::test_helpers::render_to_string(60, 20, |frame, area| {
            render_settings_overlay(frame, &app, area)
        });
        assert_eq!(out, "");
    }
}
