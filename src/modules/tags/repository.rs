//! Queries against the `tags` table.

use sqlx::SqliteConnection;

use super::models::{Tag, TagPayload};

pub async fn insert(conn: &mut SqliteConnection, tag: &TagPayload) -> Result<Tag, sqlx::Error> {
    sqlx::query_as::<_, Tag>("INSERT INTO tags (title) VALUES (?) RETURNING id, title")
        .bind(&tag.title)
        .fetch_one(&mut *conn)
        .await
}

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Tag>, sqlx::Error> {
    sqlx::query_as::<_, Tag>("SELECT id, title FROM tags ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Tag>, sqlx::Error> {
    sqlx::query_as::<_, Tag>("SELECT id, title FROM tags WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    tag: &TagPayload,
) -> Result<Tag, sqlx::Error> {
    sqlx::query_as::<_, Tag>("UPDATE tags SET title = ? WHERE id = ? RETURNING id, title")
        .bind(&tag.title)
        .bind(id)
        .fetch_one(&mut *conn)
        .await
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tags WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}
