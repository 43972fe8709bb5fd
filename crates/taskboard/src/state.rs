//! Shared application state.
//!
//! Handlers reach the store only through the `TaskRepository` trait object,
//! so the same router runs over DynamoDB or the in-memory backend.

use std::sync::Arc;

use taskboard_core::storage::TaskRepository;

use crate::storage::InMemoryTaskRepository;

/// Shared application state.
///
/// Cloned into every request handler; the repository itself is shared.
#[derive(Clone)]
pub struct AppState {
    pub task_repo: Arc<dyn TaskRepository>,
}

impl AppState {
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self { task_repo }
    }

    /// State backed by a fresh, empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTaskRepository::new()))
    }
}
