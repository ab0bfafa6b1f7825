mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use forkcast_core::AppConfig;
use forkcast_enrich::EnrichClient;
use forkcast_places::PlacesClient;
use forkcast_search::SearchPipeline;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = forkcast_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pipeline = Arc::new(build_pipeline(&config)?);
    let app = build_app(AppState { pipeline });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Wires both directory clients from config. The base-URL overrides exist
/// for pointing a deployment at a proxy or a mock.
fn build_pipeline(config: &AppConfig) -> anyhow::Result<SearchPipeline> {
    let places = match config.places_base_url.as_deref() {
        Some(base) => PlacesClient::with_base_url(
            &config.places_api_key,
            config.http_timeout_secs,
            &config.user_agent,
            base,
        )?,
        None => PlacesClient::new(
            &config.places_api_key,
            config.http_timeout_secs,
            &config.user_agent,
        )?,
    };

    let enrich = match config.enrich_base_url.as_deref() {
        Some(base) => EnrichClient::with_base_url(
            &config.enrich_api_key,
            config.http_timeout_secs,
            &config.user_agent,
            base,
        )?,
        None => EnrichClient::new(
            &config.enrich_api_key,
            config.http_timeout_secs,
            &config.user_agent,
        )?,
    };

    Ok(SearchPipeline::new(places, enrich))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
