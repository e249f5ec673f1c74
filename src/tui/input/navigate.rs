use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::task::Priority;
use crate::tui::app::{App, Mode};

use super::popups::{open_priority_menu, open_settings};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let len = app.store.len();

    match (key.modifiers, key.code) {
        // Quit; unsaved changes need a second press
        (_, KeyCode::Char('q')) => {
            if app.store.is_dirty() && !app.quit_pending {
                app.quit_pending = true;
                app.set_status("unsaved changes: press q again to quit, s to save");
            } else {
                app.should_quit = true;
            }
        }

        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cursor
        (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (_, KeyCode::Home) | (_, KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => app.cursor = len.saturating_sub(1),

        // Move the task under the cursor
        (_, KeyCode::Char('J')) | (KeyModifiers::SHIFT, KeyCode::Down) => {
            if app.cursor + 1 < len && app.store.reorder(app.cursor, app.cursor + 1) {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Char('K')) | (KeyModifiers::SHIFT, KeyCode::Up) => {
            if app.cursor > 0 && app.store.reorder(app.cursor, app.cursor - 1) {
                app.cursor -= 1;
            }
        }

        // Toggle completion
        (_, KeyCode::Char(' ')) | (_, KeyCode::Char('x')) => {
            if len > 0
                && let Err(e) = app.store.toggle_task(app.cursor)
            {
                app.set_status(e.to_string());
            }
        }

        // New task
        (_, KeyCode::Char('a')) | (_, KeyCode::Char('i')) | (_, KeyCode::Enter) => {
            app.mode = Mode::Input;
        }

        // Priority
        (_, KeyCode::Char('p')) => {
            if len > 0 {
                open_priority_menu(app, app.cursor);
            }
        }
        (_, KeyCode::Char(c @ '1'..='3')) => {
            if len > 0 {
                let priority = Priority::ALL[(c as u8 - b'1') as usize];
                app.set_priority(app.cursor, priority);
            }
        }

        // Remove completed
        (_, KeyCode::Delete) | (_, KeyCode::Char('D')) => {
            let removed = app.store.remove_completed();
            app.clamp_cursor();
            if removed > 0 {
                app.set_status(format!(
                    "removed {} completed task{}",
                    removed,
                    if removed == 1 { "" } else { "s" }
                ));
            }
        }

        (_, KeyCode::Char('s')) => app.save(),

        // Redraw from the in-memory list
        (_, KeyCode::Char('r')) => {
            app.clamp_cursor();
            app.scroll_offset = 0;
        }

        (_, KeyCode::Char(',')) => open_settings(app),

        _ => {}
    }
}
