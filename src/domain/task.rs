use crate::error::DashError;
use std::fmt;

/// Completion state of a personal task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A personal to-do item. Created pending; the only mutation is the
/// one-way flip to completed, and only `TaskStore` performs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub description: String,
    status: TaskStatus,
}

impl Task {
    fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            status: TaskStatus::Pending,
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    fn mark_completed(&mut self) {
        self.status = TaskStatus::Completed;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} [{}]", self.name, self.description, self.status)
    }
}

/// Insertion-ordered collection of tasks. Identity is positional: the
/// 1-based index shown to the user equals the position in the sequence.
/// Lives for the process only; nothing is persisted.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new pending task. Empty strings are accepted as-is.
    pub fn add(&mut self, name: impl Into<String>, description: impl Into<String>) -> &Task {
        self.tasks.push(Task::new(name.into(), description.into()));
        self.tasks.last().unwrap()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Mark the task at the given 1-based index as completed. The index is
    /// validated against the current length, not the length at render time.
    pub fn complete(&mut self, index: usize) -> Result<&Task, DashError> {
        if index == 0 || index > self.tasks.len() {
            return Err(DashError::OutOfRange);
        }
        let task = &mut self.tasks[index - 1];
        task.mark_completed();
        Ok(&self.tasks[index - 1])
    }
}
