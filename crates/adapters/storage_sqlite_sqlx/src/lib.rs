//! # rehnuma-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `rehnuma-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows; list columns hold JSON arrays
//!
//! ## Dependency rule
//! Depends on `rehnuma-app` (for port traits) and `rehnuma-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod service_repo;
mod step_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use service_repo::SqliteServiceRepository;
pub use step_repo::SqliteStepRepository;
