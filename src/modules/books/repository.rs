//! Queries against the `books` table.

use sqlx::SqliteConnection;

use super::models::{Book, BookPayload};

pub async fn insert(conn: &mut SqliteConnection, book: &BookPayload) -> Result<Book, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (title, author, description, price)
        VALUES (?, ?, ?, ?)
        RETURNING id, title, author, description, price
        "#,
    )
    .bind(&book.title)
    .bind(&book.author)
    .bind(&book.description)
    .bind(book.price)
    .fetch_one(&mut *conn)
    .await
}

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>("SELECT id, title, author, description, price FROM books ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        "SELECT id, title, author, description, price FROM books WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

/// Overwrite every column of an existing row
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    book: &BookPayload,
) -> Result<Book, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        UPDATE books
        SET title = ?, author = ?, description = ?, price = ?
        WHERE id = ?
        RETURNING id, title, author, description, price
        "#,
    )
    .bind(&book.title)
    .bind(&book.author)
    .bind(&book.description)
    .bind(book.price)
    .bind(id)
    .fetch_one(&mut *conn)
    .await
}

/// Returns the number of rows removed
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM books WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}
