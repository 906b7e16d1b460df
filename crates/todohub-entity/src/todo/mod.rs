//! Todo domain entities.

pub mod model;

pub use model::{CreateTodo, Todo};
