//! CLI command implementations
//!
//! The binary stays thin: commands load configuration, construct the store
//! client, and hand control to the HTTP server.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use crate::config::Config;
use crate::rest_api::{ApiDoc, RestServer};
use crate::store::MongoItemStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Start { config } => start(&config),
        Command::Openapi => openapi(),
    }
}

/// Start the Item API server
///
/// Startup sequence:
/// 1. Logging init
/// 2. Configuration load (file + environment overrides)
/// 3. Store client construction (single shared handle)
/// 4. HTTP server bind and serve
pub fn start(config_path: &Path) -> CliResult<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    let config = Config::load(config_path)?;

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(async {
        tracing::info!(
            uri = %config.store.uri,
            database = %config.store.database,
            "Connecting to document store"
        );

        let store = MongoItemStore::connect(&config.store)
            .await
            .map_err(|e| CliError::boot_failed(format!("Store connection failed: {}", e)))?;

        let server = RestServer::with_config(Arc::new(store), config.server);
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("Server failed: {}", e)))
    })
}

/// Print the generated OpenAPI document to stdout
pub fn openapi() -> CliResult<()> {
    let doc = ApiDoc::openapi();
    println!("{}", serde_json::to_string_pretty(&doc)?);

    Ok(())
}
