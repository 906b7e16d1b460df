//! The error type shared by every TodoHub crate.
//!
//! Stores, services and extractors all return [`AppError`]; the HTTP layer
//! turns its [`ErrorKind`] into a status code.

use thiserror::Error;

/// Coarse error category. The `Display` form is the machine-readable code
/// sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// No such record, or a record owned by someone else.
    #[error("NOT_FOUND")]
    NotFound,
    /// Bearer token missing, malformed, forged or expired.
    #[error("AUTHENTICATION")]
    Authentication,
    /// Email/password pair did not match.
    #[error("INVALID_CREDENTIALS")]
    InvalidCredentials,
    /// Request input rejected.
    #[error("VALIDATION")]
    Validation,
    /// Uniqueness violated.
    #[error("CONFLICT")]
    Conflict,
    #[error("INTERNAL")]
    Internal,
    #[error("DATABASE")]
    Database,
    #[error("CONFIGURATION")]
    Configuration,
}

impl ErrorKind {
    /// Whether the caller, not the server, is at fault.
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::NotFound
                | Self::Authentication
                | Self::InvalidCredentials
                | Self::Validation
                | Self::Conflict
        )
    }
}

type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// A categorized error with a client-safe message and an optional cause
/// that only ever reaches the logs.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub source: Option<BoxedCause>,
}

macro_rules! kind_constructors {
    ($($(#[$doc:meta])* $fn_name:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $fn_name(message: impl Into<String>) -> Self {
                Self::new(ErrorKind::$kind, message)
            }
        )*
    };
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Like [`AppError::new`], keeping `cause` for the log line.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Some(Box::new(cause)),
            ..Self::new(kind, message)
        }
    }

    kind_constructors! {
        not_found => NotFound,
        /// Rejected or missing bearer token.
        authentication => Authentication,
        validation => Validation,
        /// Duplicate of an existing unique value.
        conflict => Conflict,
        internal => Internal,
        database => Database,
        configuration => Configuration,
    }

    /// The one login failure. It never says which credential was wrong.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid Credentials")
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        let message = format!("Configuration error: {err}");
        Self::with_source(ErrorKind::Configuration, message, err)
    }
}
