//! Request DTOs with validation.
//!
//! Credential fields are optional so a missing field reaches the service
//! layer and is reported as "Please enter all fields" rather than as a
//! JSON decoding error.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: Option<String>,
    /// Plaintext password.
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub password: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: Option<String>,
    /// Plaintext password.
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub password: Option<String>,
}

/// Create todo request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateTodoRequest {
    /// Task text.
    #[validate(length(max = 1000, message = "Todo text is too long"))]
    pub text: Option<String>,
}
