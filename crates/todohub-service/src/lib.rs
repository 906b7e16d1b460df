//! # todohub-service
//!
//! Business logic for TodoHub. Each service wraps the stores and auth
//! primitives it needs, handed over as `Arc` references at construction.

pub mod auth;
pub mod context;
pub mod todo;

pub use auth::{AuthResult, AuthService};
pub use context::RequestContext;
pub use todo::TodoService;
