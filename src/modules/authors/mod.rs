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
    tag: "Authors",
    noun: "author",
    plural: "authors",
    record: "Author",
    payload: "AuthorPayload",
};

/// Authors resource: `/authors` and `/authors/{id}`
pub struct AuthorsModule;

impl AuthorsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for AuthorsModule {
    fn name(&self) -> &'static str {
        "authors"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "authors module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router<Database> {
        Router::new()
            .route("/", get(handlers::list_authors).post(handlers::create_author))
            .route(
                "/{id}",
                put(handlers::update_author).delete(handlers::delete_author),
            )
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let payload = json!({
            "type": "object",
            "properties": {
                "name": openapi::text_property("Given name"),
                "surname": openapi::text_property("Family name"),
                "phone_number": openapi::integer_property("Contact number", 1, 15)
            },
            "required": ["name", "surname", "phone_number"]
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
                CREATE TABLE IF NOT EXISTS authors (
                    id           INTEGER PRIMARY KEY AUTOINCREMENT,
                    name         TEXT    NOT NULL,
                    surname      TEXT    NOT NULL,
                    phone_number INTEGER NOT NULL
                );
                CREATE INDEX IF NOT EXISTS ix_authors_id ON authors (id);
                "#,
        }]
    }
}

/// Create a new instance of the authors module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(AuthorsModule::new())
}
