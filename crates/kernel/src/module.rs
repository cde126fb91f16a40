use async_trait::async_trait;
use axum::Router;
use bookstore_db::{Database, Migration};

/// Context provided to modules during initialization
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
    pub db: &'a Database,
}

/// Core module trait that every catalog resource implements
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module, also its URL prefix
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context
    /// Called during application startup after the schema is in place
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the Axum router for this module's routes
    /// Routes will be mounted under `/{module_name}`
    fn routes(&self) -> Router<Database> {
        Router::new()
    }

    /// Return OpenAPI specification fragment for this module as JSON
    /// Will be merged with other modules' specs
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Return the schema statements this module needs
    /// Executed in the order returned
    fn migrations(&self) -> Vec<Migration> {
        vec![]
    }

    /// Called once every module is initialized, before serving requests
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called during application shutdown
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
