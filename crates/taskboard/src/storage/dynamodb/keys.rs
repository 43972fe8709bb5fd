//! DynamoDB key generation functions.
//!
//! All tasks share one partition (`pk = "task"`) and are addressed by their
//! id in the sort key, so a single query on the partition returns every task.
//! This keeps list-all to one query at the cost of a hot partition once the
//! task count grows.

use taskboard_core::task::TaskId;

/// Partition key attribute name.
pub const PARTITION_KEY: &str = "pk";
/// Sort key attribute name.
pub const SORT_KEY: &str = "sk";
/// Constant partition value tagging task records.
pub const TASK_PARTITION: &str = "task";

/// Generate the partition key for a Task.
///
/// Pattern: `task` (constant)
pub fn task_pk() -> String {
    TASK_PARTITION.to_string()
}

/// Generate the sort key for a Task.
///
/// Pattern: `<task_id>`
pub fn task_sk(id: &TaskId) -> String {
    id.as_str().to_string()
}
