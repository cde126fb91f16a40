use anyhow::Context;
use bookstore_app::App;
use bookstore_kernel::settings::Settings;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bookstore-cli", version, about = "Bookstore catalog API tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create missing tables, then serve the HTTP API until interrupted
    Serve,
    /// Create missing tables and exit
    Migrate,
    /// Print the merged OpenAPI document; does not touch the database
    Openapi,
}

fn load_settings() -> anyhow::Result<Settings> {
    let settings = Settings::load().with_context(|| "failed to load bookstore settings")?;
    bookstore_telemetry::init(&settings.telemetry)?;
    Ok(settings)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => {
            let settings = load_settings()?;
            App::bootstrap(settings).await?.serve().await
        }
        Command::Migrate => {
            let settings = load_settings()?;
            let app = App::bootstrap(settings).await?;
            tracing::info!(
                modules = app.registry().module_count(),
                "catalog tables are in place"
            );
            app.close().await;
            Ok(())
        }
        Command::Openapi => {
            let registry = bookstore_app::modules::registry()?;
            let document = bookstore_http::openapi::document(&registry);
            println!("{}", serde_json::to_string_pretty(&document)?);
            Ok(())
        }
    }
}
