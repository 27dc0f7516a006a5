/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Service banner and health check
/// - `users`: User creation and lookup
/// - `tasks`: Per-user task CRUD
/// - `compat`: Flat task surface (no user namespacing)
/// - `chat`: Chat assistant endpoint

pub mod chat;
pub mod compat;
pub mod health;
pub mod tasks;
pub mod users;
