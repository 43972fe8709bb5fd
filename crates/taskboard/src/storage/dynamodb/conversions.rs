//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB items and `Task`.
//! These are testable in isolation without DynamoDB access.

use taskboard_core::storage::RepositoryError;
use taskboard_core::task::{Task, TaskField, TaskId};

use super::item::{get_datetime, get_parsed, get_string, Item, ItemBuilder};
use super::keys;

/// Convert a Task to a DynamoDB item.
///
/// The id is carried by the sort key; there is no separate `id` attribute.
pub fn task_to_item(task: &Task) -> Item {
    ItemBuilder::new()
        .string(keys::PARTITION_KEY, keys::task_pk())
        .string(keys::SORT_KEY, keys::task_sk(&task.id))
        .string(TaskField::Title.as_str(), task.title.as_str())
        .string(TaskField::Status.as_str(), task.status.as_str())
        .string(TaskField::Priority.as_str(), task.priority.as_str())
        .datetime(TaskField::Created.as_str(), &task.created)
        .datetime(TaskField::Modified.as_str(), &task.modified)
        .build()
}

/// Convert a DynamoDB item to a Task.
///
/// Used for query results and for the post-update record alike, so every
/// operation hands back the same shape.
pub fn item_to_task(item: &Item) -> Result<Task, RepositoryError> {
    Ok(Task {
        id: TaskId::new(get_string(item, keys::SORT_KEY)?),
        title: get_string(item, TaskField::Title.as_str())?,
        status: get_parsed(item, TaskField::Status.as_str())?,
        priority: get_parsed(item, TaskField::Priority.as_str())?,
        created: get_datetime(item, TaskField::Created.as_str())?,
        modified: get_datetime(item, TaskField::Modified.as_str())?,
    })
}
