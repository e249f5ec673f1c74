use crate::model::task::{Priority, Task};

/// Error type for index-addressed task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("no task at index {index} (list has {len})")]
    InvalidIndex { index: usize, len: usize },
}

fn check_index(tasks: &[Task], index: usize) -> Result<(), TaskError> {
    if index < tasks.len() {
        Ok(())
    } else {
        Err(TaskError::InvalidIndex {
            index,
            len: tasks.len(),
        })
    }
}

/// Append a task. Empty text is ignored and yields `None`.
pub fn add_task(tasks: &mut Vec<Task>, text: &str, priority: Priority) -> Option<usize> {
    if text.is_empty() {
        return None;
    }
    tasks.push(Task::new(text, priority));
    Some(tasks.len() - 1)
}

/// Flip the completed flag. Returns the new value.
pub fn toggle_task(tasks: &mut [Task], index: usize) -> Result<bool, TaskError> {
    check_index(tasks, index)?;
    let task = &mut tasks[index];
    task.completed = !task.completed;
    Ok(task.completed)
}

/// Drop every completed task, keeping the others in order.
/// Returns how many were removed.
pub fn remove_completed(tasks: &mut Vec<Task>) -> usize {
    let before = tasks.len();
    tasks.retain(|t| !t.completed);
    before - tasks.len()
}

pub fn set_priority(tasks: &mut [Task], index: usize, priority: Priority) -> Result<(), TaskError> {
    check_index(tasks, index)?;
    tasks[index].priority = priority;
    Ok(())
}

/// Move the task at `from` so it ends up at `to` in the list that remains
/// after removing it. A `to` past the end lands at the end.
///
/// Returns false (and leaves the list alone) when `from == to` or `from`
/// is out of range.
pub fn reorder(tasks: &mut Vec<Task>, from: usize, to: usize) -> bool {
    if from == to || from >= tasks.len() {
        return false;
    }
    let task = tasks.remove(from);
    let to = to.min(tasks.len());
    tasks.insert(to, task);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(names: &[&str]) -> Vec<Task> {
        names.iter().map(|n| Task::new(*n, Priority::Normal)).collect()
    }

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn add_appends_open_task() {
        let mut tasks = list(&["a"]);
        assert_eq!(add_task(&mut tasks, "walk dog", Priority::Normal), Some(1));
        assert_eq!(tasks.len(), 2);
        assert!(!tasks[1].completed);
        assert_eq!(tasks[1].text, "walk dog");
    }

    #[test]
    fn add_empty_is_noop() {
        let mut tasks = list(&["a"]);
        assert_eq!(add_task(&mut tasks, "", Priority::High), None);
        assert_eq!(texts(&tasks), vec!["a"]);
    }

    #[test]
    fn add_keeps_priority() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "x", Priority::High);
        assert_eq!(tasks[0].priority, Priority::High);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut tasks = list(&["a"]);
        assert_eq!(toggle_task(&mut tasks, 0), Ok(true));
        assert_eq!(toggle_task(&mut tasks, 0), Ok(false));
    }

    #[test]
    fn toggle_out_of_range() {
        let mut tasks = list(&["a"]);
        assert_eq!(
            toggle_task(&mut tasks, 3),
            Err(TaskError::InvalidIndex { index: 3, len: 1 })
        );
    }

    #[test]
    fn remove_completed_keeps_order() {
        let mut tasks = list(&["A", "B", "C", "D"]);
        tasks[0].completed = true;
        tasks[2].completed = true;
        assert_eq!(remove_completed(&mut tasks), 2);
        assert_eq!(texts(&tasks), vec!["B", "D"]);
    }

    #[test]
    fn remove_completed_with_nothing_done() {
        let mut tasks = list(&["A", "B"]);
        assert_eq!(remove_completed(&mut tasks), 0);
        assert_eq!(texts(&tasks), vec!["A", "B"]);
    }

    #[test]
    fn set_priority_in_and_out_of_range() {
        let mut tasks = list(&["a"]);
        set_priority(&mut tasks, 0, Priority::Medium).unwrap();
        assert_eq!(tasks[0].priority, Priority::Medium);
        assert!(set_priority(&mut tasks, 1, Priority::High).is_err());
    }

    #[test]
    fn reorder_forward() {
        let mut tasks = list(&["A", "B", "C", "D"]);
        assert!(reorder(&mut tasks, 0, 2));
        assert_eq!(texts(&tasks), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn reorder_backward() {
        let mut tasks = list(&["A", "B", "C", "D"]);
        assert!(reorder(&mut tasks, 3, 0));
        assert_eq!(texts(&tasks), vec!["D", "A", "B", "C"]);
    }

    #[test]
    fn reorder_same_index_is_noop() {
        for i in 0..4 {
            let mut tasks = list(&["A", "B", "C", "D"]);
            assert!(!reorder(&mut tasks, i, i));
            assert_eq!(texts(&tasks), vec!["A", "B", "C", "D"]);
        }
    }

    #[test]
    fn reorder_source_out_of_range_is_noop() {
        let mut tasks = list(&["A", "B"]);
        assert!(!reorder(&mut tasks, 5, 0));
        assert_eq!(texts(&tasks), vec!["A", "B"]);
    }

    #[test]
    fn reorder_target_past_end_clamps() {
        let mut tasks = list(&["A", "B", "C"]);
        assert!(reorder(&mut tasks, 0, 10));
        assert_eq!(texts(&tasks), vec!["B", "C", "A"]);
    }
}
