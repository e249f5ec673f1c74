use std::path::PathBuf;

use tracing::{debug, info};

use crate::io::{self, StoreError};
use crate::model::settings::Settings;
use crate::model::task::{Priority, Task};
use crate::ops::task_ops::{self, TaskError};

/// Error type for store operations that may touch the disk
#[derive(Debug, thiserror::Error)]
pub enum StoreOpError {
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the task list and the settings for the lifetime of the process.
///
/// Indices handed out by this store are only valid until the next
/// structural change (add, remove, reorder).
#[derive(Debug)]
pub struct TaskStore {
    data_dir: PathBuf,
    tasks: Vec<Task>,
    settings: Settings,
    /// Unsaved task changes exist
    dirty: bool,
}

impl TaskStore {
    /// Load tasks and settings from `data_dir`. Never fails: missing or
    /// malformed files fall back to the empty list / default settings.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let settings = io::load_settings(&data_dir);
        let tasks = io::load_tasks(&data_dir);
        info!(dir = %data_dir.display(), tasks = tasks.len(), "opened task store");
        TaskStore {
            data_dir,
            tasks,
            settings,
            dirty: false,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append a task; empty text is ignored.
    pub fn add_task(&mut self, text: &str, priority: Priority) -> Option<usize> {
        let index = task_ops::add_task(&mut self.tasks, text, priority)?;
        debug!(index, %priority, "added task");
        self.dirty = true;
        Some(index)
    }

    pub fn toggle_task(&mut self, index: usize) -> Result<bool, TaskError> {
        let completed = task_ops::toggle_task(&mut self.tasks, index)?;
        self.dirty = true;
        Ok(completed)
    }

    pub fn remove_completed(&mut self) -> usize {
        let removed = task_ops::remove_completed(&mut self.tasks);
        if removed > 0 {
            debug!(removed, "removed completed tasks");
            self.dirty = true;
        }
        removed
    }

    /// Set a task's priority and write the task list straight away.
    pub fn set_priority(&mut self, index: usize, priority: Priority) -> Result<(), StoreOpError> {
        task_ops::set_priority(&mut self.tasks, index, priority)?;
        debug!(index, %priority, "set priority");
        self.save()?;
        Ok(())
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let moved = task_ops::reorder(&mut self.tasks, from, to);
        if moved {
            debug!(from, to, "reordered task");
            self.dirty = true;
        }
        moved
    }

    /// Write the task list to disk
    pub fn save(&mut self) -> Result<(), StoreError> {
        io::save_tasks(&self.data_dir, &self.tasks)?;
        self.dirty = false;
        Ok(())
    }

    /// Replace the settings and write them to disk
    pub fn apply_settings(&mut self, settings: Settings) -> Result<(), StoreError> {
        self.settings = settings;
        io::save_settings(&self.data_dir, &self.settings)
    }
}
