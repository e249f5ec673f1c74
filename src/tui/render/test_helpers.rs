use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::model::task::Priority;
use crate::ops::TaskStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 12;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole screen of `app`
pub fn render_app(app: &mut App, w: u16, h: u16) -> String {
    render_to_string(w, h, |frame, _| super::render(frame, app))
}

/// Build an App over a temp data directory holding the given tasks,
/// already saved. Keep the TempDir alive for the duration of the test.
pub fn app_with_tasks(names: &[&str]) -> (TempDir, App) {
    let dir = TempDir::new().unwrap();
    let mut store = TaskStore::open(dir.path());
    for name in names {
        store.add_task(name, Priority::Normal);
    }
    store.save().unwrap();
    (dir, App::new(store))
}

/// Task texts in list order
pub fn texts(app: &App) -> Vec<String> {
    app.store.tasks().iter().map(|t| t.text.clone()).collect()
}
