//! Skinface - Minecraft skin avatar server.

mod adapters;
mod cassette;
mod cli;
mod compose;
mod config;
mod context;
mod error;
mod page;
mod params;
mod pipeline;
mod ports;
mod server;
mod skin;
mod upscale;

use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cassette::config::CassetteMode;
use crate::cli::Cli;
use crate::config::{Config, Settings};
use crate::context::ServiceContext;
use crate::error::AvatarError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `skinface=info`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "skinface=debug" } else { "skinface=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli) -> Result<(), AvatarError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(AvatarError::Config)?;

    // Merge and validate settings
    let settings = Settings::resolve(&cli, &config).map_err(AvatarError::InvalidArgument)?;
    tracing::debug!(config = %config_path.display(), ?settings, "resolved settings");

    // Create context based on mode (live / recording / replaying)
    let (ctx, recording_session) = match CassetteMode::from_env() {
        CassetteMode::Replaying(path) => {
            tracing::info!("Replaying skins from: {}", path.display());
            (ServiceContext::replaying(&path, settings.scale)?, None)
        }
        CassetteMode::Recording => {
            tracing::info!("Recording mode enabled");
            let (ctx, session) = ServiceContext::recording(&settings);
            (ctx, Some(session))
        }
        CassetteMode::Live => (ServiceContext::live(&settings), None),
    };

    let app = server::build_router(Arc::new(ctx));

    let listener = tokio::net::TcpListener::bind(settings.bind).await?;
    tracing::info!(
        upstream = %settings.upstream,
        scale = settings.scale,
        "HTTP server listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("Server stopped");

    // Finish recording if active
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => tracing::info!("Cassette saved: {}", path.display()),
            Err(e) => tracing::warn!("Failed to save cassette: {e}"),
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
