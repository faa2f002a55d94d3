use std::path::{Path, PathBuf};

use anyhow::Context;
use sqlx::{
    Row,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous},
};
use tracing::debug;

use super::KeyValueStore;

/// SQLite-backed key-value store, one row per key.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    database_file: PathBuf,
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if missing) the database at `database_file` and applies
    /// the embedded migrations.
    pub async fn open<P: AsRef<Path>>(database_file: P) -> anyhow::Result<Self> {
        let database_file = database_file.as_ref().to_path_buf();

        if let Some(parent) = database_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                anyhow::bail!("Database parent directory does not exist: {:?}", parent);
            }
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&database_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open database {:?}", database_file))?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        debug!(path = ?database_file, "opened key-value store");
        Ok(Self {
            database_file,
            pool,
        })
    }

    pub fn database_file(&self) -> &Path {
        &self.database_file
    }

    /// Flushes the WAL into the main database file and closes the pool.
    pub async fn close(self) -> anyhow::Result<()> {
        sqlx::query("PRAGMA wal_checkpoint(TRUNCATE);")
            .execute(&self.pool)
            .await?;
        self.pool.close().await;
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to read key {:?}", key))?;
        Ok(row.map(|row| row.get::<String, _>("value")))
    }

    async fn set_item(&self, key: &str, value: String) -> anyhow::Result<()> {
        sqlx::query(
            r#"INSERT INTO kv_store (key, value) VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to write key {:?}", key))?;
        Ok(())
    }
}
