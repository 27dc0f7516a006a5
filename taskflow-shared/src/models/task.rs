/// Task model and database operations
///
/// Tasks are the core entity of TaskFlow: to-do items with a title, an
/// optional description, a priority, and a two-valued completion flag.
/// Completion has no state machine beyond toggle: incomplete <-> complete,
/// and toggling twice restores the original value.
///
/// Tasks created through the per-user API always carry an owner and are only
/// visible through that owner's identifier. Tasks created through the flat
/// compatibility surface have no owner (`user_id` is NULL) and never appear
/// in any user's list.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID REFERENCES users(id) ON DELETE CASCADE,
///     title VARCHAR(255) NOT NULL,
///     description TEXT,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     priority INTEGER NOT NULL DEFAULT 1,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskflow_shared::models::task::{CreateTask, Task};
/// use taskflow_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let owner = Uuid::new_v4();
/// let task = Task::create(&pool, CreateTask {
///     user_id: Some(owner),
///     title: "Buy groceries".to_string(),
///     description: None,
///     completed: false,
///     priority: 1,
/// }).await?;
///
/// // Flip the completion flag
/// Task::toggle_completed_for_user(&pool, task.id, owner).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Task model representing a to-do item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,

    /// Owning user (None for tasks created through the flat surface)
    pub user_id: Option<Uuid>,

    /// Task title
    pub title: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Completion flag, false on creation unless set explicitly
    pub completed: bool,

    /// Priority, 1 by default
    pub priority: i32,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Owning user, if any
    pub user_id: Option<Uuid>,

    /// Task title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial completion flag
    pub completed: bool,

    /// Priority
    pub priority: i32,
}

/// Input for updating a task
///
/// All fields are optional. Only non-None fields are written; the rest keep
/// their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,

    /// New priority
    pub priority: Option<i32>,
}

impl UpdateTask {
    /// Returns true when no field is set, i.e. the update would be a no-op
    /// beyond refreshing `updated_at`.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
    }
}

impl Task {
    /// Creates a new task
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails, including when
    /// `user_id` references a user that does not exist.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, title, description, completed, priority)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, description, completed, priority,
                      created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.completed)
        .bind(data.priority)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID scoped to its owning user
    ///
    /// This is the lookup used by the per-user API surface: a task belonging
    /// to another user (or to no user) is reported as absent.
    pub async fn find_by_id_and_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, completed, priority,
                   created_at, updated_at
            FROM tasks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists a user's tasks, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, completed, priority,
                   created_at, updated_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Lists every task regardless of owner, newest first
    ///
    /// Serves the flat compatibility surface.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, completed, priority,
                   created_at, updated_at
            FROM tasks
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Applies a partial update to a task scoped to its owning user
    ///
    /// Only the fields present in `data` are written; `updated_at` is always
    /// refreshed.
    ///
    /// # Returns
    ///
    /// The updated task, or None if no task with that ID exists under that
    /// user.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build the update statement dynamically from the present fields
        let mut query = String::from("UPDATE tasks SET updated_at = NOW()");
        let mut bind_count = 2;

        if data.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.completed.is_some() {
            bind_count += 1;
            query.push_str(&format!(", completed = ${}", bind_count));
        }
        if data.priority.is_some() {
            bind_count += 1;
            query.push_str(&format!(", priority = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 AND user_id = $2 \
             RETURNING id, user_id, title, description, completed, priority, \
             created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Task>(&query).bind(id).bind(user_id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(completed) = data.completed {
            q = q.bind(completed);
        }
        if let Some(priority) = data.priority {
            q = q.bind(priority);
        }

        let task = q.fetch_optional(pool).await?;

        Ok(task)
    }

    /// Flips the completion flag of a user's task
    ///
    /// The toggle is its own inverse: calling this twice restores the
    /// original value.
    pub async fn toggle_completed_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET completed = NOT completed,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, description, completed, priority,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Flips the completion flag of any task by ID
    ///
    /// Serves the flat compatibility surface, where tasks are not namespaced
    /// by owner.
    pub async fn toggle_completed(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET completed = NOT completed,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, title, description, completed, priority,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a user's task
    ///
    /// # Returns
    ///
    /// True if a row was removed, false if no task with that ID exists under
    /// that user.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes any task by ID (flat compatibility surface)
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_task_default_is_empty() {
        let update = UpdateTask::default();
        assert!(update.is_empty());
        assert!(update.title.is_none());
        assert!(update.description.is_none());
        assert!(update.completed.is_none());
        assert!(update.priority.is_none());
    }

    #[test]
    fn test_update_task_with_field_is_not_empty() {
        let update = UpdateTask {
            completed: Some(true),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_task_round_trips_through_json() {
        let task = Task {
            id: Uuid::nil(),
            user_id: None,
            title: "Test task".to_string(),
            description: None,
            completed: false,
            priority: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.title, "Test task");
        assert!(!parsed.completed);
        assert_eq!(parsed.priority, 1);
    }

    // CRUD behavior against a live database is exercised by the API
    // integration tests.
}
