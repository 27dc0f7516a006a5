/// Flat task surface
///
/// A second, un-namespaced wire contract kept for clients of the original
/// single-list deployment. Tasks here are not scoped to a user: listing
/// returns every row, creation stores no owner, and PUT means "toggle
/// completion" rather than "update fields".
///
/// # Endpoints
///
/// - `GET    /tasks` - List all tasks
/// - `POST   /tasks` - Create an unowned task
/// - `PUT    /tasks/:task_id` - Toggle completion
/// - `DELETE /tasks/:task_id` - Delete

use super::tasks::{CreateTaskRequest, DeleteResponse};
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskflow_shared::models::task::{CreateTask, Task};
use uuid::Uuid;
use validator::Validate;

/// List every task, newest first
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_all(&state.db).await?;

    Ok(Json(tasks))
}

/// Create a task with no owner
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation errors
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    req.validate()?;

    let task = Task::create(
        &state.db,
        CreateTask {
            user_id: None,
            title: req.title,
            description: req.description,
            completed: req.completed,
            priority: req.priority,
        },
    )
    .await?;

    tracing::info!(task_id = %task.id, "Created unowned task");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Toggle a task's completion flag
///
/// # Errors
///
/// - `404 Not Found`: No task with that ID
pub async fn toggle_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<Task>> {
    let task = Task::toggle_completed(&state.db, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Delete a task
///
/// # Errors
///
/// - `404 Not Found`: No task with that ID
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = Task::delete(&state.db, task_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    Ok(Json(DeleteResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
