// Portfolio site entry point.
// Parses the command line, sets up logging, and dispatches to the server or a command.

mod cache;
mod cli;
mod commands;
mod config;
mod content;
mod error;
mod github;
mod http;
mod web;
mod youtube;

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Cli, Command};
use crate::web::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Serve { host, port } => serve(cli.settings, &host, port).await,
        Command::RefreshGithubProjects { limit } => {
            let state = AppState::new(cli.settings).context("failed to set up clients")?;
            let outcome = commands::refresh_github_projects(
                &state.github,
                &state.cache,
                &state.settings.github_username,
                limit,
            )
            .await;
            outcome.report();
            Ok(())
        }
    }
}

/// Human-readable logs by default, JSON when `LOG_FORMAT=json`.
fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfolio=info,tower_http=info"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(env_filter)
            .init();
    }
}

async fn serve(settings: config::Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings).context("failed to set up clients")?;
    info!(
        github_username = %state.settings.github_username,
        youtube_channel = state.settings.youtube_channel_id.is_some(),
        cache_timeout = state.settings.cache_timeout,
        "starting portfolio site"
    );

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", host, port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("listening on http://{}", addr);
    axum::serve(listener, web::create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}
