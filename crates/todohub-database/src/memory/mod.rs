//! In-memory store implementations backed by `dashmap`.
//!
//! Used for local development (`database.provider = "memory"`) and tests.

pub mod todo;
pub mod user;

pub use todo::MemoryTodoStore;
pub use user::MemoryUserStore;
