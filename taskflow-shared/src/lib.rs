//! # TaskFlow Shared Library
//!
//! This crate contains the types and business logic shared by the TaskFlow
//! API server: database access, models, and the chat engine.
//!
//! ## Module Organization
//!
//! - `models`: Database models (`User`, `Task`) and their CRUD operations
//! - `db`: Connection pool management and migrations
//! - `chat`: Rule-based chat engine behind a pluggable responder trait

pub mod chat;
pub mod db;
pub mod models;

/// Current version of the TaskFlow shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
