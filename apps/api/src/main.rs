mod config;
mod errors;
mod fixtures;
mod models;
mod query;
mod repository;
mod routes;
mod state;
mod tracker;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::repository::{MockRepository, SessionContext};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job dashboard API v{}", env!("CARGO_PKG_VERSION"));

    let session = SessionContext::seeded()?;
    info!(
        jobs = session.jobs.len(),
        applications = session.tracker.list_applications().len(),
        "Demo session seeded"
    );

    let latency = config.latency();
    info!("Mock repository latency profile: {:?}", latency);
    let repo = Arc::new(MockRepository::new(session, latency));

    let state = AppState {
        repo,
        config: config.clone(),
    };

    // The dashboard front end is served from its own origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
