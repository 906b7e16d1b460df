//! Todo list operations for the authenticated user.

pub mod service;

pub use service::TodoService;
