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
    tag: "Tags",
    noun: "tag",
    plural: "tags",
    record: "Tag",
    payload: "TagPayload",
};

/// Tags resource: `/tags` and `/tags/{id}`
pub struct TagsModule;

impl TagsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for TagsModule {
    fn name(&self) -> &'static str {
        "tags"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "tags module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router<Database> {
        Router::new()
            .route("/", get(handlers::list_tags).post(handlers::create_tag))
            .route("/{id}", put(handlers::update_tag).delete(handlers::delete_tag))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let payload = json!({
            "type": "object",
            "properties": {
                "title": openapi::text_property("Tag label")
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
                CREATE TABLE IF NOT EXISTS tags (
                    id    INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT    NOT NULL
                );
                CREATE INDEX IF NOT EXISTS ix_tags_id ON tags (id);
                "#,
        }]
    }
}

/// Create a new instance of the tags module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(TagsModule::new())
}
