mod error;
mod operations;
mod requests;
mod types;

pub use error::TaskError;
pub use operations::{apply_patch, new_task, validate_create, validate_title, validate_update};
pub use requests::{CreateTaskRequest, TaskPatch, UpdateTaskRequest};
pub use types::{Task, TaskField, TaskId, TaskPriority, TaskStatus};
