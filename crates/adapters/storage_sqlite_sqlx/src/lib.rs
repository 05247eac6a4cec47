//! # frontdesk-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `frontdesk-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and rows of the `hotel` table
//!
//! ## Dependency rule
//! Depends on `frontdesk-app` (for port traits) and `frontdesk-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod reservation_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use reservation_repo::SqliteReservationRepository;
