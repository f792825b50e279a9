use rocket::serde::json::Json;
use rocket::*;
use sqlx::Row;

mod request_error;
pub mod requests;

pub use request_error::*;

pub type DatabasePool = sqlx::any::AnyPool;

/// Shared handle to the backing store, managed by rocket and injected
/// into the request handlers. Read-only after startup.
pub struct Db {
    pool: Option<DatabasePool>,
}

impl Db {
    pub fn new(pool: Option<DatabasePool>) -> Self {
        Self { pool }
    }

    /// Returns the connection pool, or an error if the startup
    /// connection never succeeded.
    pub fn pool(&self) -> RequestResult<&DatabasePool> {
        self.pool.as_ref().ok_or(RequestError::NotConnected)
    }
}

/// Connects to the database at `database_url` and makes sure
/// the leaderboard table exists.
pub async fn connect(database_url: &str) -> Result<DatabasePool, sqlx::Error> {
    let pool = DatabasePool::connect(database_url).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &DatabasePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS leaderboard (
            name TEXT NOT NULL,
            score DOUBLE PRECISION NOT NULL,
            difficulty TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
