//! Application bootstrap shared by the binary and the CLI.

use anyhow::Context;
use axum::Router;
use bookstore_kernel::{settings::Settings, Database, InitCtx, ModuleRegistry};

use crate::modules;

/// A connected database with every catalog table in place
pub struct App {
    settings: Settings,
    db: Database,
    registry: ModuleRegistry,
}

impl App {
    /// Connect to the database and create any missing tables
    pub async fn bootstrap(settings: Settings) -> anyhow::Result<Self> {
        let registry = modules::registry().context("failed to register modules")?;

        let db = Database::connect(
            &settings.database.url,
            settings.database.max_connections,
        )
        .await?;

        db.apply_migrations(&registry.collect_migrations())
            .await
            .context("failed to create catalog tables")?;

        tracing::info!(modules = registry.module_count(), "bookstore bootstrap complete");

        Ok(Self {
            settings,
            db,
            registry,
        })
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Fully assembled HTTP router
    pub fn router(&self) -> Router {
        bookstore_http::build_router(&self.registry, &self.settings, &self.db)
    }

    /// Run the module lifecycle around the HTTP server until a shutdown signal
    pub async fn serve(self) -> anyhow::Result<()> {
        let ctx = InitCtx {
            settings: &self.settings,
            db: &self.db,
        };
        self.registry.init_modules(&ctx).await?;
        self.registry.start_modules(&ctx).await?;

        let served =
            bookstore_http::start_server(&self.registry, &self.settings, &self.db, shutdown_signal())
                .await;

        self.registry.stop_modules().await?;
        self.db.close().await;
        served
    }

    pub async fn close(self) {
        self.db.close().await;
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
