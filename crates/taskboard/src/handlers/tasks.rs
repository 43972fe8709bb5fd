//! Task handlers.
//!
//! Thin adapters from HTTP to `TaskRepository`: decode the body, call the
//! repository, encode the result. All validation and store semantics live
//! below this layer.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use taskboard_core::task::{CreateTaskRequest, Task, TaskPatch, UpdateTaskRequest};

use crate::{handlers::AppError, state::AppState};

/// List every task (GET /api/tasks).
#[axum::debug_handler]
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = state.task_repo.list_tasks().await?;
    tracing::debug!(count = tasks.len(), "Listed tasks");
    Ok(Json(tasks))
}

/// Create a task (POST /api/tasks).
#[axum::debug_handler]
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let Json(request) = payload?;

    let task = state.task_repo.create_task(request).await?;
    tracing::info!(task_id = %task.id, title = %task.title, "Created task");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Apply a sparse patch to a task (PATCH /api/tasks/{id}).
#[axum::debug_handler]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, AppError> {
    let Json(patch) = payload?;

    let task = state
        .task_repo
        .update_task(UpdateTaskRequest::new(id, patch))
        .await?;
    tracing::info!(task_id = %task.id, status = %task.status, "Updated task");

    Ok(Json(task))
}
