/// Per-user task endpoints
///
/// Tasks on this surface are namespaced under their owning user: every path
/// carries the user ID, and a task is only visible or mutable through its
/// owner's identifier. List and create verify the user exists first, so an
/// unknown user yields 404 rather than an empty list or an orphaned task.
///
/// # Endpoints
///
/// - `GET    /api/:user_id/tasks` - List the user's tasks (newest first)
/// - `POST   /api/:user_id/tasks` - Create a task
/// - `GET    /api/:user_id/tasks/:task_id` - Fetch a task
/// - `PUT    /api/:user_id/tasks/:task_id` - Partial update
/// - `DELETE /api/:user_id/tasks/:task_id` - Delete
/// - `PATCH  /api/:user_id/tasks/:task_id/complete` - Toggle completion

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use taskflow_shared::models::task::{CreateTask, Task, UpdateTask};
use taskflow_shared::models::user::User;
use uuid::Uuid;
use validator::Validate;

/// Create task request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Optional description
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    /// Initial completion flag (defaults to false)
    #[serde(default)]
    pub completed: bool,

    /// Priority (defaults to 1)
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    1
}

/// Update task request
///
/// Only the fields present in the payload are written.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New title
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    /// New description
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,

    /// New priority
    pub priority: Option<i32>,
}

/// Delete confirmation response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Confirmation message
    pub message: String,
}

/// Returns 404 when the path user does not exist
async fn ensure_user(db: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
    if User::exists(db, user_id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("User not found".to_string()))
    }
}

/// List a user's tasks, newest first
///
/// # Errors
///
/// - `404 Not Found`: Unknown user
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Task>>> {
    ensure_user(&state.db, user_id).await?;

    let tasks = Task::list_by_user(&state.db, user_id).await?;

    Ok(Json(tasks))
}

/// Create a task for a user
///
/// The created task answers with `completed = false` unless the payload set
/// it explicitly.
///
/// # Endpoint
///
/// ```text
/// POST /api/:user_id/tasks
/// Content-Type: application/json
///
/// {
///   "title": "Buy groceries",
///   "description": "milk, eggs",
///   "priority": 2
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Unknown user
/// - `422 Unprocessable Entity`: Validation errors
pub async fn create_task(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    req.validate()?;

    ensure_user(&state.db, user_id).await?;

    let task = Task::create(
        &state.db,
        CreateTask {
            user_id: Some(user_id),
            title: req.title,
            description: req.description,
            completed: req.completed,
            priority: req.priority,
        },
    )
    .await?;

    tracing::info!(user_id = %user_id, task_id = %task.id, "Created task");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Fetch a single task
///
/// # Errors
///
/// - `404 Not Found`: No task with that ID under that user
pub async fn get_task(
    State(state): State<AppState>,
    Path((user_id, task_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id_and_user(&state.db, task_id, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Partially update a task
///
/// Fields absent from the payload keep their stored values; `updated_at` is
/// refreshed either way.
///
/// # Errors
///
/// - `404 Not Found`: No task with that ID under that user
/// - `422 Unprocessable Entity`: Validation errors
pub async fn update_task(
    State(state): State<AppState>,
    Path((user_id, task_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate()?;

    let task = Task::update(
        &state.db,
        task_id,
        user_id,
        UpdateTask {
            title: req.title,
            description: req.description,
            completed: req.completed,
            priority: req.priority,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// Delete a task
///
/// # Errors
///
/// - `404 Not Found`: No task with that ID under that user
pub async fn delete_task(
    State(state): State<AppState>,
    Path((user_id, task_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = Task::delete_for_user(&state.db, task_id, user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    tracing::info!(user_id = %user_id, task_id = %task_id, "Deleted task");

    Ok(Json(DeleteResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

/// Toggle a task's completion flag
///
/// The toggle is an involution: applying it twice restores the original
/// value.
///
/// # Errors
///
/// - `404 Not Found`: No task with that ID under that user
pub async fn toggle_complete(
    State(state): State<AppState>,
    Path((user_id, task_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<Task>> {
    let task = Task::toggle_completed_for_user(&state.db, task_id, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_request_defaults() {
        let req: CreateTaskRequest = serde_json::from_str(r#"{"title":"Test task"}"#).unwrap();
        assert_eq!(req.title, "Test task");
        assert!(!req.completed);
        assert_eq!(req.priority, 1);
        assert!(req.description.is_none());
    }

    #[test]
    fn test_create_task_request_rejects_empty_title() {
        let req: CreateTaskRequest = serde_json::from_str(r#"{"title":""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_task_request_all_optional() {
        let req: UpdateTaskRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_ok());
        assert!(req.title.is_none());
        assert!(req.completed.is_none());
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(default_priority(), 1);
    }
}
