use axum::{extract::State, Json};
use bookstore_http::{AppError, DbSession, ResourceId, ValidJson};
use bookstore_kernel::Database;

use super::models::{Author, AuthorPayload};
use super::repository;

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Author with id {id} does not exist"))
}

pub async fn create_author(
    State(db): State<Database>,
    ValidJson(payload): ValidJson<AuthorPayload>,
) -> Result<Json<Author>, AppError> {
    let mut session = DbSession::open(&db).await?;
    let mut tx = session.begin_write().await?;
    let author = repository::insert(&mut tx, &payload).await?;
    tx.commit().await?;

    tracing::info!(author_id = author.id, "author created");
    Ok(Json(author))
}

pub async fn list_authors(mut session: DbSession) -> Result<Json<Vec<Author>>, AppError> {
    let authors = repository::list(&mut session).await?;
    Ok(Json(authors))
}

pub async fn update_author(
    State(db): State<Database>,
    ResourceId(id): ResourceId,
    ValidJson(payload): ValidJson<AuthorPayload>,
) -> Result<Json<Author>, AppError> {
    let mut session = DbSession::open(&db).await?;
    let mut tx = session.begin_write().await?;
    if repository::find(&mut tx, id).await?.is_none() {
        return Err(not_found(id));
    }
    let author = repository::update(&mut tx, id, &payload).await?;
    tx.commit().await?;

    tracing::info!(author_id = id, "author updated");
    Ok(Json(author))
}

pub async fn delete_author(
    ResourceId(id): ResourceId,
    mut session: DbSession,
) -> Result<Json<String>, AppError> {
    let mut tx = session.begin_write().await?;
    if repository::find(&mut tx, id).await?.is_none() {
        return Err(not_found(id));
    }
    repository::delete(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!(author_id = id, "author deleted");
    Ok(Json(format!("Deleted author with id {id}")))
}
