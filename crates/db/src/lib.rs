//! SQLite connection pool and schema bootstrap.

use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Sqlite,
};

/// Schema statements contributed by a module.
///
/// Statements must be idempotent (`CREATE TABLE IF NOT EXISTS ...`): they run
/// on every startup and there is no record of what was applied before.
#[derive(Debug, Clone)]
pub struct Migration {
    pub id: &'static str,
    pub up: &'static str,
}

/// Shared handle to the connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database behind `url`, creating the file if missing.
    ///
    /// Accepts any URL understood by sqlx, e.g. `sqlite://bookstore.db` or
    /// `sqlite::memory:`.
    pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url '{url}'"))?
            .create_if_missing(true);

        let pool_options = if in_memory {
            // Each connection to an in-memory database gets its own empty
            // database, so pin a single connection for the pool's lifetime.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("failed to connect to database '{url}'"))?;

        tracing::info!(target: "bookstore-db", in_memory, "database pool ready");

        Ok(Self { pool })
    }

    /// Run every collected schema statement against the pool, in order.
    pub async fn apply_migrations(
        &self,
        migrations: &[(String, Migration)],
    ) -> anyhow::Result<()> {
        for (module, migration) in migrations {
            sqlx::raw_sql(migration.up)
                .execute(&self.pool)
                .await
                .with_context(|| {
                    format!(
                        "failed to apply schema '{}' for module '{}'",
                        migration.id, module
                    )
                })?;

            tracing::info!(
                target: "bookstore-db",
                module = %module,
                migration = migration.id,
                "schema ensured"
            );
        }

        Ok(())
    }

    /// Check out one connection; it goes back to the pool when dropped.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, sqlx::Error> {
        self.pool.acquire().await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for checked-out connections to return, then close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!(target: "bookstore-db", "database pool closed");
    }
}
