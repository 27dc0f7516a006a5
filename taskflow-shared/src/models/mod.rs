/// Database models for TaskFlow
///
/// This module contains the two entities of the system and their CRUD
/// operations.
///
/// # Models
///
/// - `user`: User accounts
/// - `task`: To-do items owned by users
///
/// # Example
///
/// ```no_run
/// use taskflow_shared::models::user::{CreateUser, User};
/// use taskflow_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     name: "Jane Doe".to_string(),
///     email: "jane@example.com".to_string(),
/// }).await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
