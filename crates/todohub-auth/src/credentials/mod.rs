//! Credential storage keyed by normalized email.

pub mod store;

pub use store::CredentialStore;
