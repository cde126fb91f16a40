use axum::{extract::State, Json};
use bookstore_http::{AppError, DbSession, ResourceId, ValidJson};
use bookstore_kernel::Database;

use super::models::{Book, BookPayload};
use super::repository;

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Book with id {id} does not exist"))
}

// Handlers taking a body open their session only after the body validated,
// so rejected or slow uploads never hold a pooled connection.

pub async fn create_book(
    State(db): State<Database>,
    ValidJson(payload): ValidJson<BookPayload>,
) -> Result<Json<Book>, AppError> {
    let mut session = DbSession::open(&db).await?;
    let mut tx = session.begin_write().await?;
    let book = repository::insert(&mut tx, &payload).await?;
    tx.commit().await?;

    tracing::info!(book_id = book.id, "book created");
    Ok(Json(book))
}

pub async fn list_books(mut session: DbSession) -> Result<Json<Vec<Book>>, AppError> {
    let books = repository::list(&mut session).await?;
    Ok(Json(books))
}

pub async fn update_book(
    State(db): State<Database>,
    ResourceId(id): ResourceId,
    ValidJson(payload): ValidJson<BookPayload>,
) -> Result<Json<Book>, AppError> {
    let mut session = DbSession::open(&db).await?;
    let mut tx = session.begin_write().await?;
    if repository::find(&mut tx, id).await?.is_none() {
        return Err(not_found(id));
    }
    let book = repository::update(&mut tx, id, &payload).await?;
    tx.commit().await?;

    tracing::info!(book_id = id, "book updated");
    Ok(Json(book))
}

pub async fn delete_book(
    ResourceId(id): ResourceId,
    mut session: DbSession,
) -> Result<Json<String>, AppError> {
    let mut tx = session.begin_write().await?;
    if repository::find(&mut tx, id).await?.is_none() {
        return Err(not_found(id));
    }
    repository::delete(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!(book_id = id, "book deleted");
    Ok(Json(format!("Deleted book with id {id}")))
}
