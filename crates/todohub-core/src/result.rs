//! Convenience result type alias for TodoHub.

use crate::error::AppError;

/// A specialized `Result` type for TodoHub operations.
pub type AppResult<T> = Result<T, AppError>;
