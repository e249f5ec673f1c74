use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Keys while the new-task input line has focus.
pub(super) fn handle_input_line(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let line = &mut app.input;

    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => submit(app),
        KeyCode::Tab => line.priority = line.priority.next(),
        KeyCode::Char('w') if ctrl => {
            let start = unicode::word_boundary_left(&line.buffer, line.cursor);
            line.buffer.replace_range(start..line.cursor, "");
            line.cursor = start;
        }
        KeyCode::Char('u') if ctrl => line.clear(),
        KeyCode::Char('a') if ctrl => line.cursor = 0,
        KeyCode::Char('e') if ctrl => line.cursor = line.buffer.len(),
        KeyCode::Char(c) if !ctrl => {
            line.buffer.insert(line.cursor, c);
            line.cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&line.buffer, line.cursor) {
                line.buffer.replace_range(prev..line.cursor, "");
                line.cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(&line.buffer, line.cursor) {
                line.buffer.replace_range(line.cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&line.buffer, line.cursor) {
                line.cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(&line.buffer, line.cursor) {
                line.cursor = next;
            }
        }
        KeyCode::Home => line.cursor = 0,
        KeyCode::End => line.cursor = line.buffer.len(),
        _ => {}
    }
}

/// Add the typed task as entered. An empty line is ignored and the line
/// stays open.
fn submit(app: &mut App) {
    let text = app.input.buffer.clone();
    if let Some(index) = app.store.add_task(&text, app.input.priority) {
        app.cursor = index;
        app.input.clear();
    }
}
