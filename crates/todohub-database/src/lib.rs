//! # todohub-database
//!
//! Storage for TodoHub. Defines the [`UserStore`] and [`TodoStore`] traits,
//! a PostgreSQL implementation backed by sqlx, an in-memory implementation,
//! and the [`Database`] handle that selects between them.

pub mod handle;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use handle::Database;
pub use store::{TodoStore, UserStore};
