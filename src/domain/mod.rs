pub mod screen;
pub mod task;

pub use screen::Screen;
pub use task::{Task, TaskStatus, TaskStore};
