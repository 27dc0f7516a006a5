/// User endpoints
///
/// # Endpoints
///
/// - `POST /users` - Create a user
/// - `GET /users/:user_id` - Fetch a user by ID
///
/// There are no update or delete endpoints; a user is a stable profile
/// record that tasks hang off.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskflow_shared::models::user::{CreateUser, User};
use uuid::Uuid;
use validator::Validate;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Create a new user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com"
/// }
/// ```
///
/// # Errors
///
/// - `409 Conflict`: Email already registered
/// - `422 Unprocessable Entity`: Validation errors
/// - `500 Internal Server Error`: Database error
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    req.validate()?;

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "Created user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Fetch a user by ID
///
/// # Errors
///
/// - `404 Not Found`: Unknown user ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}
