//! One database session per request.

use std::ops::{Deref, DerefMut};

use axum::{extract::FromRequestParts, http::request::Parts};
use bookstore_db::Database;
use sqlx::{pool::PoolConnection, Connection, Sqlite, SqliteConnection, Transaction};

use crate::error::AppError;

/// A pooled connection checked out for the lifetime of a single request.
///
/// The connection goes back to the pool when the session is dropped, which
/// happens when the handler returns, fails, or unwinds. Transactions opened
/// with [`DbSession::begin`] roll back unless committed.
pub struct DbSession {
    conn: PoolConnection<Sqlite>,
}

impl DbSession {
    pub async fn open(db: &Database) -> Result<Self, AppError> {
        let conn = db.acquire().await?;
        tracing::trace!(target: "bookstore-http", "session opened");
        Ok(Self { conn })
    }

    /// Deferred transaction; fine for reads.
    pub async fn begin(&mut self) -> Result<Transaction<'_, Sqlite>, AppError> {
        Ok(Connection::begin(&mut *self.conn).await?)
    }

    /// Transaction holding the write lock from the start.
    ///
    /// SQLite cannot upgrade a deferred transaction's read lock while another
    /// writer is active and fails with `SQLITE_BUSY` without waiting. Taking
    /// the lock up front lets the busy timeout queue concurrent writers.
    pub async fn begin_write(&mut self) -> Result<Transaction<'_, Sqlite>, AppError> {
        Ok(Connection::begin_with(&mut *self.conn, "BEGIN IMMEDIATE").await?)
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        tracing::trace!(target: "bookstore-http", "session released");
    }
}

impl FromRequestParts<Database> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, db: &Database) -> Result<Self, Self::Rejection> {
        Self::open(db).await
    }
}
