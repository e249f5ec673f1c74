use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use crate::model::settings::FONT_FAMILIES;
use crate::model::task::Priority;
use crate::tui::app::{App, Mode, PriorityMenu, SettingsDraft, SettingsField};

// ---------------------------------------------------------------------------
// Priority menu
// ---------------------------------------------------------------------------

/// Open the priority menu for the task at `index`, preselecting its
/// current priority.
pub fn open_priority_menu(app: &mut App, index: usize) {
    let Some(task) = app.store.task(index) else {
        return;
    };
    let selected = Priority::ALL
        .iter()
        .position(|p| *p == task.priority)
        .unwrap_or(0);
    app.priority_menu = Some(PriorityMenu { index, selected });
    app.mode = Mode::PriorityMenu;
}

pub(super) fn close_priority_menu(app: &mut App) {
    app.priority_menu = None;
    app.menu_area = None;
    app.mode = Mode::Navigate;
}

/// Set the chosen priority and close the menu
pub(super) fn choose_priority(app: &mut App, priority: Priority) {
    if let Some(menu) = app.priority_menu {
        app.set_priority(menu.index, priority);
    }
    close_priority_menu(app);
}

pub(super) fn handle_priority_menu(app: &mut App, key: KeyEvent) {
    let Some(menu) = app.priority_menu.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => close_priority_menu(app),
        KeyCode::Down | KeyCode::Char('j') => {
            menu.selected = (menu.selected + 1).min(Priority::ALL.len() - 1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            menu.selected = menu.selected.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let priority = Priority::ALL[menu.selected];
            choose_priority(app, priority);
        }
        KeyCode::Char(c @ '1'..='3') => {
            choose_priority(app, Priority::ALL[(c as u8 - b'1') as usize]);
        }
        KeyCode::Char('n') => choose_priority(app, Priority::Normal),
        KeyCode::Char('m') => choose_priority(app, Priority::Medium),
        KeyCode::Char('h') => choose_priority(app, Priority::High),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Settings overlay
// ---------------------------------------------------------------------------

pub fn open_settings(app: &mut App) {
    app.settings_draft = Some(SettingsDraft::new(app.store.settings()));
    app.mode = Mode::Settings;
}

fn close_settings(app: &mut App) {
    app.settings_draft = None;
    app.mode = Mode::Navigate;
}

/// Apply the draft, save it and rebuild the theme
fn apply_settings(app: &mut App) {
    let Some(draft) = app.settings_draft.take() else {
        return;
    };
    match app.store.apply_settings(draft.settings) {
        Ok(()) => app.set_status("settings saved"),
        Err(e) => {
            warn!("could not save settings: {}", e);
            app.set_status(format!("could not save settings: {}", e));
        }
    }
    app.refresh_theme();
    close_settings(app);
}

pub(super) fn handle_settings(app: &mut App, key: KeyEvent) {
    let Some(draft) = app.settings_draft.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };
    match key.code {
        KeyCode::Esc => close_settings(app),
        KeyCode::Enter => apply_settings(app),
        KeyCode::Tab => draft.field = draft.field.next(),
        KeyCode::BackTab => draft.field = draft.field.prev(),
        _ => match draft.field {
            SettingsField::FontFamily => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    draft.font_cursor = (draft.font_cursor + 1).min(FONT_FAMILIES.len() - 1);
                    draft.settings.font_family = FONT_FAMILIES[draft.font_cursor].to_string();
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    draft.font_cursor = draft.font_cursor.saturating_sub(1);
                    draft.settings.font_family = FONT_FAMILIES[draft.font_cursor].to_string();
                }
                _ => {}
            },
            SettingsField::FontSize => match key.code {
                KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('l') => {
                    let size = draft.settings.font_size + 1;
                    draft.settings.set_font_size(size);
                }
                KeyCode::Left | KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('h') => {
                    let size = draft.settings.font_size.saturating_sub(1);
                    draft.settings.set_font_size(size);
                }
                _ => {}
            },
            SettingsField::DarkMode => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) {
                    draft.settings.dark_mode = !draft.settings.dark_mode;
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use super::*;
    use crate::io::load_settings;
    use crate::model::settings::{MAX_FONT_SIZE, Settings};
    use crate::tui::render::test_helpers::app_with_tasks;
    use crossterm::event::KeyCode;

    #[test]
    fn menu_preselects_current_priority() {
        let (_dir, mut app) = app_with_tasks(&["A"]);
        app.store.set_priority(0, Priority::Medium).unwrap();
        handle_key(&mut app, ch('p'));
        assert_eq!(app.mode, Mode::PriorityMenu);
        assert_eq!(app.priority_menu.map(|m| m.selected), Some(1));
    }

    #[test]
    fn menu_enter_applies_and_saves() {
        let (dir, mut app) = app_with_tasks(&["A", "B"]);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('p'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.priority_menu.is_none());
        assert_eq!(app.store.tasks()[1].priority, Priority::High);
        assert_eq!(crate::io::load_tasks(dir.path())[1].priority, Priority::High);
    }

    #[test]
    fn menu_escape_changes_nothing() {
        let (_dir, mut app) = app_with_tasks(&["A"]);
        handle_key(&mut app, ch('p'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.store.tasks()[0].priority, Priority::Normal);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn menu_letter_shortcut() {
        let (_dir, mut app) = app_with_tasks(&["A"]);
        handle_key(&mut app, ch('p'));
        handle_key(&mut app, ch('m'));
        assert_eq!(app.store.tasks()[0].priority, Priority::Medium);
    }

    #[test]
    fn settings_cancel_discards_draft() {
        let (dir, mut app) = app_with_tasks(&[]);
        handle_key(&mut app, ch(','));
        assert_eq!(app.mode, Mode::Settings);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.store.settings(), &Settings::default());
        assert!(!dir.path().join("settings.json").exists());
    }

    #[test]
    fn settings_apply_saves_and_rethemes() {
        let (dir, mut app) = app_with_tasks(&[]);
        handle_key(&mut app, ch(','));
        // Font family: TkDefaultFont -> Arial
        handle_key(&mut app, ch('j'));
        // Font size: 10 -> 12
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, ch('+'));
        handle_key(&mut app, ch('+'));
        // Dark mode on
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, ch(' '));
        handle_key(&mut app, key(KeyCode::Enter));

        let expected = Settings {
            font_family: "Arial".into(),
            font_size: 12,
            dark_mode: true,
        };
        assert_eq!(app.store.settings(), &expected);
        assert_eq!(load_settings(dir.path()), expected);
        assert!(app.theme.dark_mode);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn font_size_stays_in_range() {
        let (_dir, mut app) = app_with_tasks(&[]);
        handle_key(&mut app, ch(','));
        handle_key(&mut app, key(KeyCode::Tab));
        for _ in 0..30 {
            handle_key(&mut app, ch('+'));
        }
        let size = app.settings_draft.as_ref().map(|d| d.settings.font_size);
        assert_eq!(size, Some(MAX_FONT_SIZE));
    }
}
