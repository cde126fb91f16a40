//! HTTP server facade with Axum, error handling, and OpenAPI support.

use std::future::Future;

use anyhow::Context;
use axum::{routing::get, Router};

use bookstore_db::Database;
use bookstore_kernel::{settings::Settings, ModuleRegistry};

pub mod error;
pub mod openapi;
pub mod router;
pub mod session;
pub mod validation;

pub use error::AppError;
pub use session::DbSession;
pub use validation::{Checks, FieldError, ResourceId, ValidJson, Validate};

use router::RouterBuilder;

/// Serve until `shutdown` resolves, then drain in-flight requests
pub async fn start_server(
    registry: &ModuleRegistry,
    settings: &Settings,
    db: &Database,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let app = build_router(registry, settings, db);

    let address = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind to {address}"))?;

    tracing::info!("HTTP server listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Build the main HTTP router with all module routes mounted
pub fn build_router(registry: &ModuleRegistry, settings: &Settings, db: &Database) -> Router {
    let mut router_builder = RouterBuilder::new().route("/healthz", get(health_check));

    for module in registry.modules() {
        let module_name = module.name();
        tracing::info!(
            module = module_name,
            "mounting module routes under /{}",
            module_name
        );
        router_builder =
            router_builder.mount_module(module_name, module.routes().with_state(db.clone()));
    }

    router_builder = router_builder.with_openapi(registry);

    // Layers wrap only what is already routed, so they go last
    router_builder = router_builder.with_tracing().with_cors().with_request_id();
    if let Some(timeout_ms) = settings.server.request_timeout_ms {
        router_builder = router_builder.with_timeout(timeout_ms);
    }

    router_builder.build()
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}
