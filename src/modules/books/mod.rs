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
    tag: "Books",
    noun: "book",
    plural: "books",
    record: "Book",
    payload: "BookPayload",
};

/// Books resource: `/books` and `/books/{id}`
pub struct BooksModule;

impl BooksModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router<Database> {
        Router::new()
            .route("/", get(handlers::list_books).post(handlers::create_book))
            .route(
                "/{id}",
                put(handlers::update_book).delete(handlers::delete_book),
            )
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let payload = json!({
            "type": "object",
            "properties": {
                "title": openapi::text_property("Title of the book"),
                "author": openapi::text_property("Author of the book, as free text"),
                "description": openapi::text_property("Short description of the book"),
                "price": openapi::integer_property("Price in whole currency units", 0, 1000)
            },
            "required": ["title", "author", "description", "price"]
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
                CREATE TABLE IF NOT EXISTS books (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    title       TEXT    NOT NULL,
                    author      TEXT    NOT NULL,
                    description TEXT    NOT NULL,
                    price       INTEGER NOT NULL
                );
                CREATE INDEX IF NOT EXISTS ix_books_id ON books (id);
                "#,
        }]
    }
}

/// Create a new instance of the books module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new())
}
