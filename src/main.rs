use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use textbook_assistant_backend::{
    config::{AllowedOrigins, AppConfig},
    routes,
    services::{agent::Agent, model_client::OpenAiCompatClient},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let client = OpenAiCompatClient::new(
        config.api_key.clone(),
        config.model_base_url.clone(),
        config.model_name.clone(),
    )
    .context("failed to create model client")?;
    if !client.has_api_key() {
        warn!("GEMINI_API_KEY is not set; /chat will fail until it is configured");
    }
    info!(model = client.model(), base_url = %config.model_base_url, "model client ready");

    if config.allowed_origins == AllowedOrigins::Any {
        // restrict with CORS_ALLOWED_ORIGINS for production deployments
        warn!("CORS allows every origin with credentials");
    }

    let state = AppState::shared(Agent::textbook_assistant(Arc::new(client)));
    let app = routes::app(state, &config.allowed_origins);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("textbook assistant running at http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
