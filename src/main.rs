//! Galactic Cocktails
//!
//! An MCP server for the cocktail catalog and the cocktailatrice calculator.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use galactic_cocktails::mcp::GalacticService;
use galactic_cocktails::suggest::{self, SuggestionProvider};
use galactic_cocktails::{build_info, db};

/// Get the database path from environment or use default
fn get_database_path() -> PathBuf {
    std::env::var("GALACTIC_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path.push("galactic.db");
            path
        })
}

/// Suggestion provider from the environment; the server still runs without one
fn load_provider() -> Option<Arc<dyn SuggestionProvider>> {
    match suggest::create_provider_from_env() {
        Ok(provider) => {
            eprintln!(
                "Suggestion provider: {} ({})",
                provider.provider_name(),
                provider.model_name()
            );
            Some(Arc::from(provider))
        }
        Err(e) => {
            tracing::warn!("Cocktail suggestions disabled: {}", e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("galactic_cocktails=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let db_path = get_database_path();
    eprintln!("Database path: {}", db_path.display());

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    eprintln!("Initializing database...");
    let database = db::Database::new(&db_path)?;

    database.with_conn(|conn| {
        db::migrations::run_migrations(conn)?;
        let version = db::migrations::get_schema_version(conn)?;
        eprintln!("Database schema version: {}", version);
        Ok(())
    })?;

    let service = GalacticService::new(db_path, database, load_provider());

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
