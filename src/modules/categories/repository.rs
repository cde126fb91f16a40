//! Queries against the `category` table.

use sqlx::SqliteConnection;

use super::models::{Category, CategoryPayload};

pub async fn insert(
    conn: &mut SqliteConnection,
    category: &CategoryPayload,
) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>("INSERT INTO category (title) VALUES (?) RETURNING id, title")
        .bind(&category.title)
        .fetch_one(&mut *conn)
        .await
}

pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, title FROM category ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, title FROM category WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    category: &CategoryPayload,
) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "UPDATE category SET title = ? WHERE id = ? RETURNING id, title",
    )
    .bind(&category.title)
    .bind(id)
    .fetch_one(&mut *conn)
    .await
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM category WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::categories::create_module;
    use bookstore_kernel::Database;

    async fn session() -> (Database, sqlx::pool::PoolConnection<sqlx::Sqlite>) {
        let db = Database::connect("sqlite::memory:", 1).await.unwrap();
        let migrations: Vec<_> = create_module()
            .migrations()
            .into_iter()
            .map(|m| ("categories".to_string(), m))
            .collect();
        db.apply_migrations(&migrations).await.unwrap();
        let conn = db.acquire().await.unwrap();
        (db, conn)
    }

    fn payload(title: &str) -> CategoryPayload {
        CategoryPayload {
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let (_db, mut conn) = session().await;

        let first = insert(&mut conn, &payload("Fiction")).await.unwrap();
        assert_eq!(delete(&mut conn, first.id).await.unwrap(), 1);
        let second = insert(&mut conn, &payload("Fiction")).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(list(&mut conn).await.unwrap(), vec![second]);
    }

    #[tokio::test]
    async fn update_keeps_id_and_replaces_title() {
        let (_db, mut conn) = session().await;

        let created = insert(&mut conn, &payload("Poetry")).await.unwrap();
        let updated = update(&mut conn, created.id, &payload("Verse")).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Verse");
        assert_eq!(find(&mut conn, created.id).await.unwrap(), Some(updated));
        assert_eq!(find(&mut conn, created.id + 1).await.unwrap(), None);
    }
}
