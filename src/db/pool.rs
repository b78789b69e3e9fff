use crate::config::DatabaseConfig;
use crate::db::schema::SQLITE_INIT;
use sqlx::{Sqlite, SqlitePool, Transaction};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

/// Open the connection pool and make sure every catalog table exists.
pub async fn connect(cfg: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let connect_opts = SqliteConnectOptions::from_str(cfg.url.as_str())?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections.max(1))
        .connect_with(connect_opts)
        .await?;

    apply_schema(&pool).await?;

    info!(
        url = %cfg.url,
        max_connections = cfg.max_connections,
        "database pool initialized"
    );
    Ok(pool)
}

/// Start a transaction that takes the write lock up front.
///
/// A deferred transaction that reads before writing cannot wait for the lock
/// once another writer has committed; SQLite fails it with `SQLITE_BUSY`.
/// `BEGIN IMMEDIATE` queues on the busy timeout instead.
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
