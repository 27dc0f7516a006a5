/// Rule-based chat responder
///
/// Classifies a message into an intent by case-insensitive substring
/// matching against fixed keyword lists, then returns the canned reply for
/// that intent. Messages matching no list get an echo fallback listing the
/// available commands.
///
/// Rules are checked in a fixed order, so a message containing keywords from
/// several lists resolves to the first matching intent.

use super::{ChatReply, ChatResponder};
use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

const CREATE_KEYWORDS: &[&str] = &["add", "create", "new"];
const LIST_KEYWORDS: &[&str] = &["show", "list", "tasks"];
const COMPLETE_KEYWORDS: &[&str] = &["complete", "done", "finish"];
const DELETE_KEYWORDS: &[&str] = &["delete", "remove"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "help"];

/// Intent recognized in a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// User wants to create a task
    CreateTask,

    /// User wants to see their tasks
    ListTasks,

    /// User wants to mark a task complete
    CompleteTask,

    /// User wants to remove a task
    DeleteTask,

    /// Greeting or request for help
    Greeting,

    /// No keyword matched
    Unknown,
}

impl Intent {
    /// Classifies a message by keyword matching
    ///
    /// Matching is case-insensitive and substring-based; rule order decides
    /// ties.
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|word| message.contains(word));

        if matches(CREATE_KEYWORDS) {
            Intent::CreateTask
        } else if matches(LIST_KEYWORDS) {
            Intent::ListTasks
        } else if matches(COMPLETE_KEYWORDS) {
            Intent::CompleteTask
        } else if matches(DELETE_KEYWORDS) {
            Intent::DeleteTask
        } else if matches(GREETING_KEYWORDS) {
            Intent::Greeting
        } else {
            Intent::Unknown
        }
    }
}

/// Keyword-matching responder with canned replies
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedResponder;

impl RuleBasedResponder {
    /// Creates a new rule-based responder
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatResponder for RuleBasedResponder {
    async fn reply(&self, message: &str, user_id: Option<Uuid>) -> ChatReply {
        let intent = Intent::classify(message);

        debug!(?intent, user_id = ?user_id, "Classified chat message");

        match intent {
            Intent::CreateTask => ChatReply {
                response: "I'll help you create a task. Use the task form in dashboard."
                    .to_string(),
                action_taken: Some("suggest_create_task".to_string()),
                suggested_action: Some("create_task_form".to_string()),
            },
            Intent::ListTasks => ChatReply {
                response: "Your tasks are displayed in the dashboard.".to_string(),
                action_taken: Some("suggest_view_tasks".to_string()),
                suggested_action: Some("navigate_to_dashboard".to_string()),
            },
            Intent::CompleteTask => ChatReply {
                response: "Click the checkbox next to any task to mark it complete.".to_string(),
                action_taken: Some("suggest_complete_task".to_string()),
                suggested_action: Some("click_task_checkbox".to_string()),
            },
            Intent::DeleteTask => ChatReply {
                response: "Use the delete button in the dashboard to remove tasks.".to_string(),
                action_taken: Some("suggest_delete_task".to_string()),
                suggested_action: Some("click_delete_button".to_string()),
            },
            Intent::Greeting => ChatReply {
                response:
                    "Hello! I'm TaskFlow assistant. Try: 'add task', 'show tasks', 'complete task'"
                        .to_string(),
                action_taken: Some("provide_assistance".to_string()),
                suggested_action: Some("show_help_menu".to_string()),
            },
            Intent::Unknown => ChatReply {
                response: format!(
                    "I received: '{}'. Try: 'add task', 'show tasks', or 'help'",
                    message
                ),
                action_taken: Some("acknowledge_message".to_string()),
                suggested_action: Some("show_available_commands".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_create_keywords() {
        assert_eq!(Intent::classify("add a task"), Intent::CreateTask);
        assert_eq!(Intent::classify("create something"), Intent::CreateTask);
        assert_eq!(Intent::classify("I need a new reminder"), Intent::CreateTask);
    }

    #[test]
    fn test_classify_list_keywords() {
        assert_eq!(Intent::classify("show me everything"), Intent::ListTasks);
        assert_eq!(Intent::classify("list them"), Intent::ListTasks);
        assert_eq!(Intent::classify("my tasks please"), Intent::ListTasks);
    }

    #[test]
    fn test_classify_complete_keywords() {
        assert_eq!(Intent::classify("mark it complete"), Intent::CompleteTask);
        assert_eq!(Intent::classify("that one is done"), Intent::CompleteTask);
        assert_eq!(Intent::classify("finish the report"), Intent::CompleteTask);
    }

    #[test]
    fn test_classify_delete_keywords() {
        assert_eq!(Intent::classify("delete the old one"), Intent::DeleteTask);
        assert_eq!(Intent::classify("remove that"), Intent::DeleteTask);
    }

    #[test]
    fn test_classify_greeting_keywords() {
        assert_eq!(Intent::classify("hello there"), Intent::Greeting);
        assert_eq!(Intent::classify("help"), Intent::Greeting);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Intent::classify("ADD A TASK"), Intent::CreateTask);
        assert_eq!(Intent::classify("Hello"), Intent::Greeting);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(Intent::classify("what is the weather"), Intent::Unknown);
        assert_eq!(Intent::classify(""), Intent::Unknown);
    }

    #[test]
    fn test_classify_rule_order_decides_ties() {
        // "delete the new task" contains both delete and create keywords;
        // the create rule is checked first.
        assert_eq!(Intent::classify("delete the new task"), Intent::CreateTask);
        // "show" beats "done"
        assert_eq!(Intent::classify("show me what is done"), Intent::ListTasks);
    }

    #[tokio::test]
    async fn test_reply_create_task() {
        let responder = RuleBasedResponder::new();
        let reply = responder.reply("add buy milk", None).await;

        assert_eq!(reply.action_taken.as_deref(), Some("suggest_create_task"));
        assert_eq!(reply.suggested_action.as_deref(), Some("create_task_form"));
    }

    #[tokio::test]
    async fn test_reply_unknown_echoes_message() {
        let responder = RuleBasedResponder::new();
        let reply = responder.reply("quux", None).await;

        assert!(reply.response.contains("'quux'"));
        assert_eq!(reply.action_taken.as_deref(), Some("acknowledge_message"));
    }

    #[tokio::test]
    async fn test_reply_ignores_user_context() {
        let responder = RuleBasedResponder::new();
        let with_user = responder.reply("hello", Some(Uuid::new_v4())).await;
        let without_user = responder.reply("hello", None).await;

        assert_eq!(with_user, without_user);
    }
}
