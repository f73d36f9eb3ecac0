//! Book Finder Server - web form front-end for Open Library search

use anyhow::Result;
use bookfinder_server::{routes, state};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookfinder_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create application state
    let state = state::AppState::new();

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr = match std::env::var("BOOKFINDER_ADDR") {
        Ok(addr) => addr.parse()?,
        Err(_) => SocketAddr::from(([127, 0, 0, 1], 3000)),
    };
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
