/// Chat assistant endpoint
///
/// Takes a free-text message plus optional user context and returns the
/// responder's reply. The reply logic lives behind the `ChatResponder`
/// trait in `taskflow-shared`; this handler only validates, delegates, and
/// serializes.
///
/// # Endpoint
///
/// ```text
/// POST /api/chat          (also mounted at POST /chat)
/// Content-Type: application/json
///
/// {
///   "message": "add a task",
///   "user_id": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "response": "I'll help you create a task. Use the task form in dashboard.",
///   "action_taken": "suggest_create_task",
///   "suggested_action": "create_task_form"
/// }
/// ```

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Chat request
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    /// Free-text message
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,

    /// Optional user context
    pub user_id: Option<Uuid>,
}

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Reply text
    pub response: String,

    /// Machine-readable label of what the responder did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_taken: Option<String>,

    /// Hint for the client about what to do next
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

/// Chat endpoint handler
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Empty or oversized message
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    req.validate()?;

    tracing::debug!(user_id = ?req.user_id, "Handling chat message");

    let reply = state.responder.reply(&req.message, req.user_id).await;

    Ok(Json(ChatResponse {
        response: reply.response,
        action_taken: reply.action_taken,
        suggested_action: reply.suggested_action,
    }))
}
