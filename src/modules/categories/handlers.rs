use axum::{extract::State, Json};
use bookstore_http::{AppError, DbSession, ResourceId, ValidJson};
use bookstore_kernel::Database;

use super::models::{Category, CategoryPayload};
use super::repository;

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Category with id {id} does not exist"))
}

pub async fn create_category(
    State(db): State<Database>,
    ValidJson(payload): ValidJson<CategoryPayload>,
) -> Result<Json<Category>, AppError> {
    let mut session = DbSession::open(&db).await?;
    let mut tx = session.begin_write().await?;
    let category = repository::insert(&mut tx, &payload).await?;
    tx.commit().await?;

    tracing::info!(category_id = category.id, "category created");
    Ok(Json(category))
}

pub async fn list_categories(mut session: DbSession) -> Result<Json<Vec<Category>>, AppError> {
    let categories = repository::list(&mut session).await?;
    Ok(Json(categories))
}

pub async fn update_category(
    State(db): State<Database>,
    ResourceId(id): ResourceId,
    ValidJson(payload): ValidJson<CategoryPayload>,
) -> Result<Json<Category>, AppError> {
    let mut session = DbSession::open(&db).await?;
    let mut tx = session.begin_write().await?;
    if repository::find(&mut tx, id).await?.is_none() {
        return Err(not_found(id));
    }
    let category = repository::update(&mut tx, id, &payload).await?;
    tx.commit().await?;

    tracing::info!(category_id = id, "category updated");
    Ok(Json(category))
}

pub async fn delete_category(
    ResourceId(id): ResourceId,
    mut session: DbSession,
) -> Result<Json<String>, AppError> {
    let mut tx = session.begin_write().await?;
    if repository::find(&mut tx, id).await?.is_none() {
        return Err(not_found(id));
    }
    repository::delete(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!(category_id = id, "category deleted");
    Ok(Json(format!("Deleted category with id {id}")))
}
