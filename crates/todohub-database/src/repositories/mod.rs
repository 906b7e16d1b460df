//! PostgreSQL repository implementations.

pub mod todo;
pub mod user;

pub use todo::TodoRepository;
pub use user::UserRepository;

/// Pool for the repository tests, from `TODOHUB_TEST_DATABASE_URL`.
///
/// Returns `None`, and the calling test passes vacuously, when the variable
/// is unset.
#[cfg(test)]
pub(crate) async fn test_pool() -> Option<sqlx::PgPool> {
    let Ok(url) = std::env::var("TODOHUB_TEST_DATABASE_URL") else {
        eprintln!("TODOHUB_TEST_DATABASE_URL not set; skipping PostgreSQL test");
        return None;
    };
    let pool = sqlx::PgPool::connect(&url)
        .await
        .expect("connect to test database");
    crate::migration::run_migrations(&pool)
        .await
        .expect("migrate test database");
    Some(pool)
}
