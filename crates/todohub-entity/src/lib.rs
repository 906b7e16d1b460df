//! # todohub-entity
//!
//! Domain entity models for TodoHub. Every struct in this crate represents
//! a database table row or the data needed to create one. Row types derive
//! `sqlx::FromRow`.

pub mod todo;
pub mod user;
