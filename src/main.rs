mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, error::AppError, state::AppState};

const DEFAULT_LOG_FILTER: &str = "info,resetboard=debug";
const BOT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let lookup = startup::build_lookup(&config, http_client)?;
    let state = AppState::new(db, lookup);

    tracing::info!("Starting resetboard");

    let bot_client = bot::start::init_bot(&config, state.clone()).await?;
    let shard_manager = bot_client.shard_manager.clone();
    let bot_handle = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let listener = tokio::net::TcpListener::bind(config.http_bind_addr).await?;
    tracing::info!("Serving health endpoint on {}", config.http_bind_addr);

    axum::serve(listener, router::router().with_state(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped, shutting down Discord shards");
    shard_manager.shutdown_all().await;

    if tokio::time::timeout(BOT_SHUTDOWN_TIMEOUT, bot_handle)
        .await
        .is_err()
    {
        tracing::warn!("Discord bot did not stop within {:?}", BOT_SHUTDOWN_TIMEOUT);
    }

    tracing::info!("Shutdown complete");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
///
/// A signal handler that cannot be installed is logged and never resolves, leaving the
/// other one in charge.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C, starting graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
