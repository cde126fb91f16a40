pub mod handlers;
pub mod models;
pub mod repository;

use async_trait::async_trait;
use axum::{
    routing::{get, put},
    Router,
};
use bookstore_kernel::{Database, InitCtx, Migration, Module};
use serde_json::json;

use crate::modules::openapi::{self, ResourceDoc};

const DOC: ResourceDoc = ResourceDoc {
    tag: "Categories",
    noun: "category",
    plural: "categories",
    record: "Category",
    payload: "CategoryPayload",
};

/// Categories resource: `/categories` and `/categories/{id}`
pub struct CategoriesModule;

impl CategoriesModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for CategoriesModule {
    fn name(&self) -> &'static str {
        "categories"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "categories module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router<Database> {
        Router::new()
            .route(
                "/",
                get(handlers::list_categories).post(handlers::create_category),
            )
            .route(
                "/{id}",
                put(handlers::update_category).delete(handlers::delete_category),
            )
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let payload = json!({
            "type": "object",
            "properties": {
                "title": openapi::text_property("Category name")
            },
            "required": ["title"]
        });

        Some(openapi::crud_fragment(
            &DOC,
            openapi::record_schema(&payload),
            payload,
        ))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: r#"
                CREATE TABLE IF NOT EXISTS category (
                    id    INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT    NOT NULL
                );
                CREATE INDEX IF NOT EXISTS ix_category_id ON category (id);
                "#,
        }]
    }
}

/// Create a new instance of the categories module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(CategoriesModule::new())
}
