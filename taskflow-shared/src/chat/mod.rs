/// Chat engine for the assistant endpoint
///
/// The chat endpoint is a simple text-in/text-out contract: a free-text
/// message (plus optional user context) goes in, a reply comes out. The
/// actual reply logic sits behind the [`ChatResponder`] trait so it can be
/// swapped for an external model without touching the HTTP layer. The
/// implementation shipped in-tree is [`RuleBasedResponder`], a keyword
/// matcher.
///
/// # Example
///
/// ```
/// use taskflow_shared::chat::{ChatResponder, RuleBasedResponder};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let responder = RuleBasedResponder::new();
/// let reply = responder.reply("please add a task", None).await;
/// assert_eq!(reply.action_taken.as_deref(), Some("suggest_create_task"));
/// # }
/// ```

pub mod rules;

pub use rules::RuleBasedResponder;

use async_trait::async_trait;
use uuid::Uuid;

/// Reply produced by a chat responder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Reply text shown to the user
    pub response: String,

    /// Machine-readable label of what the responder did
    pub action_taken: Option<String>,

    /// Hint for the client about what to do next
    pub suggested_action: Option<String>,
}

/// Text-in/text-out contract for chat reply generation
///
/// Implementations must be cheap to share across requests; the API server
/// holds one behind an `Arc` in its application state.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    /// Produces a reply to a free-text message
    ///
    /// `user_id` carries optional user context; the rule-based implementation
    /// ignores it, but external-model implementations may use it to
    /// personalize replies.
    async fn reply(&self, message: &str, user_id: Option<Uuid>) -> ChatReply;
}
