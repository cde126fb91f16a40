//! Queries against the `authors` table.

use sqlx::SqliteConnection;

use super::models::{Author, AuthorPayload};

pub async fn insert(
    conn: &mut SqliteConnection,
    author: &AuthorPayload,
) -> Result<Author, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        INSERT INTO authors (name, surname, phone_number)
        VALUES (?, ?, ?)
        RETURNING id, name, surname, phone_number
        "#,
    )
    .bind(&author.name)
    .bind(&author.surname)
    .bind(author.phone_number)
    .fetch_one(&mut *conn)
    .await
}

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Author>, sqlx::Error> {
    sqlx::query_as::<_, Author>("SELECT id, name, surname, phone_number FROM authors ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Author>, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        "SELECT id, name, surname, phone_number FROM authors WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    author: &AuthorPayload,
) -> Result<Author, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        UPDATE authors
        SET name = ?, surname = ?, phone_number = ?
        WHERE id = ?
        RETURNING id, name, surname, phone_number
        "#,
    )
    .bind(&author.name)
    .bind(&author.surname)
    .bind(author.phone_number)
    .bind(id)
    .fetch_one(&mut *conn)
    .await
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM authors WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}
