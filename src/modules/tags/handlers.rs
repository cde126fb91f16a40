use axum::{extract::State, Json};
use bookstore_http::{AppError, DbSession, ResourceId, ValidJson};
use bookstore_kernel::Database;

use super::models::{Tag, TagPayload};
use super::repository;

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Tag with id {id} does not exist"))
}

pub async fn create_tag(
    State(db): State<Database>,
    ValidJson(payload): ValidJson<TagPayload>,
) -> Result<Json<Tag>, AppError> {
    let mut session = DbSession::open(&db).await?;
    let mut tx = session.begin_write().await?;
    let tag = repository::insert(&mut tx, &payload).await?;
    tx.commit().await?;

    tracing::info!(tag_id = tag.id, "tag created");
    Ok(Json(tag))
}

pub async fn list_tags(mut session: DbSession) -> Result<Json<Vec<Tag>>, AppError> {
    let tags = repository::list(&mut session).await?;
    Ok(Json(tags))
}

pub async fn update_tag(
    State(db): State<Database>,
    ResourceId(id): ResourceId,
    ValidJson(payload): ValidJson<TagPayload>,
) -> Result<Json<Tag>, AppError> {
    let mut session = DbSession::open(&db).await?;
    let mut tx = session.begin_write().await?;
    if repository::find(&mut tx, id).await?.is_none() {
        return Err(not_found(id));
    }
    let tag = repository::update(&mut tx, id, &payload).await?;
    tx.commit().await?;

    tracing::info!(tag_id = id, "tag updated");
    Ok(Json(tag))
}

pub async fn delete_tag(
    ResourceId(id): ResourceId,
    mut session: DbSession,
) -> Result<Json<String>, AppError> {
    let mut tx = session.begin_write().await?;
    if repository::find(&mut tx, id).await?.is_none() {
        return Err(not_found(id));
    }
    repository::delete(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!(tag_id = id, "tag deleted");
    Ok(Json(format!("Deleted tag with id {id}")))
}
