use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::model::task::Priority;
use crate::ops::DragState;
use crate::tui::app::{App, Mode, RowPart};

use super::popups::{choose_priority, close_priority_menu, open_priority_menu};

/// Handle a mouse event. Rows are addressed through the layout captured
/// by the last draw.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match app.mode {
        Mode::Navigate => handle_list_mouse(app, mouse),
        Mode::PriorityMenu => handle_menu_mouse(app, mouse),
        Mode::Input => {
            // Clicking the list leaves the input line
            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                && app.row_at(mouse.row).is_some()
            {
                app.mode = Mode::Navigate;
                handle_list_mouse(app, mouse);
            }
        }
        Mode::Settings => {}
    }
}

fn handle_list_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // A press starts a new interaction even if an earlier release was lost
            app.drag = DragState::Idle;
            app.drag_hover = None;
            let Some(row) = app.row_at(mouse.row).copied() else {
                return;
            };
            app.cursor = row.index;
            match row.part_at(mouse.column) {
                RowPart::Swatch => open_priority_menu(app, row.index),
                RowPart::Checkbox => {
                    if let Err(e) = app.store.toggle_task(row.index) {
                        app.set_status(e.to_string());
                    }
                }
                RowPart::Handle | RowPart::Text => {
                    app.drag.press(row.index);
                    app.drag_hover = Some(mouse.row);
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.drag.is_dragging() {
                app.drag_hover = Some(mouse.row);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => app.finish_drag(mouse.row),
        MouseEventKind::ScrollDown => {
            if app.cursor + 1 < app.store.len() {
                app.cursor += 1;
            }
        }
        MouseEventKind::ScrollUp => app.cursor = app.cursor.saturating_sub(1),
        _ => {}
    }
}

fn handle_menu_mouse(app: &mut App, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let Some(area) = app.menu_area else {
        close_priority_menu(app);
        return;
    };
    // Entries sit inside a one-cell border
    let inside_x = mouse.column > area.x && mouse.column + 1 < area.x + area.width;
    let entry = mouse.row.checked_sub(area.y + 1).map(usize::from);
    match entry {
        Some(i) if inside_x && i < Priority::ALL.len() => choose_priority(app, Priority::ALL[i]),
        _ => close_priority_menu(app),
    }
}
