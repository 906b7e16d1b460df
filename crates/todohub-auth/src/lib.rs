//! # todohub-auth
//!
//! Authentication for TodoHub.
//!
//! ## Modules
//!
//! - `credentials`: registration and password checks against the user store
//! - `jwt`: session token issuing and validation
//! - `password`: Argon2id password hashing and policy enforcement

pub mod credentials;
pub mod jwt;
pub mod password;

pub use credentials::CredentialStore;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
