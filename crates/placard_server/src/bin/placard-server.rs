//! Placard Server - LaTeX design relay in front of the Anthropic Messages API.

use clap::Parser;
use placard_server::{AppState, PlacardConfig, create_router, init_tracing};
use std::path::PathBuf;
use tracing::{info, warn};

/// Command-line arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "placard-server")]
#[command(about = "Placard - brand-aware LaTeX design relay")]
#[command(version)]
struct Args {
    /// Path to configuration file (defaults to placard.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration file
    #[arg(long, env = "PLACARD_BIND")]
    bind: Option<String>,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Validate configuration and exit
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let args = Args::parse();
    let mut config = PlacardConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }

    init_tracing(&config.logging);
    info!(config_file = ?args.config, "Starting Placard server");

    let state = AppState::from_config(&config, args.api_key.as_deref())?;
    info!(
        model = %config.model.name,
        endpoint = %config.model.endpoint,
        max_tokens = config.model.max_tokens,
        analysis_max_tokens = config.model.analysis_max_tokens,
        brand_prompt = ?config.brand.prompt_file,
        "Configuration loaded"
    );

    if args.dry_run {
        info!("DRY RUN MODE - configuration validated, not listening");
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Placard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
