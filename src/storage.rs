use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

const CREATE_USERS: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

// The once-per-day policy lives in the UNIQUE(user_id, entry_date)
// constraint, so concurrent creates cannot slip past an application-level
// existence check.
const CREATE_MOOD_ENTRIES: &str = "\
CREATE TABLE IF NOT EXISTS mood_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    mood TEXT NOT NULL CHECK (mood IN ('Happy', 'Sad', 'Angry', 'Okay')),
    note TEXT CHECK (length(note) <= 150),
    entry_date TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE (user_id, entry_date)
)";

const CREATE_HISTORY_INDEX: &str = "\
CREATE INDEX IF NOT EXISTS idx_mood_entries_user_created
ON mood_entries (user_id, created_at DESC)";

pub async fn connect(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_MOOD_ENTRIES).execute(pool).await?;
    sqlx::query(CREATE_HISTORY_INDEX).execute(pool).await?;
    Ok(())
}

/// In-memory pool with the schema applied, for service-level tests.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    init_schema(&pool).await.expect("apply schema");
    pool
}
