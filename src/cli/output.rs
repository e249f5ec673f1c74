use serde::Serialize;

use crate::model::palette::priority_color;
use crate::model::settings::Settings;
use crate::model::task::{Priority, Task};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson<'a> {
    pub index: usize,
    pub text: &'a str,
    pub completed: bool,
    pub priority: Priority,
    pub color: &'static str,
}

pub fn task_to_json(index: usize, task: &Task, dark_mode: bool) -> TaskJson<'_> {
    TaskJson {
        index,
        text: &task.text,
        completed: task.completed,
        priority: task.priority,
        color: priority_color(task.priority, dark_mode),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Format a task as a single line: `  3 [x] !! text`
pub fn format_task_line(index: usize, task: &Task, index_width: usize) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let marker = match task.priority {
        Priority::Normal => "  ",
        Priority::Medium => "! ",
        Priority::High => "!!",
    };
    format!(
        "{:>width$} {} {} {}",
        index,
        check,
        marker,
        task.text,
        width = index_width
    )
}

/// Format the whole list, one task per line
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "no tasks".to_string();
    }
    let width = (tasks.len() - 1).to_string().len();
    tasks
        .iter()
        .enumerate()
        .map(|(i, t)| format_task_line(i, t, width))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_settings(settings: &Settings) -> String {
    format!(
        "font_family: {}\nfont_size: {}\ndark_mode: {}",
        settings.font_family, settings.font_size, settings.dark_mode
    )
}
