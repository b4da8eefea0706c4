use std::sync::Arc;

use anyhow::Context;
use medassist_backend::{config::Config, routes, state::AppState, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(model = %config.model, "using Gemini model");

    let state = Arc::new(AppState::from_config(&config));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;

    info!("Server is running on port {}", config.port);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
