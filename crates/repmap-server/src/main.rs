mod api;
mod middleware;
mod snapshot;

use std::sync::Arc;

use repmap_geo::{load_map, BoundaryClient};
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    snapshot::Snapshot,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = repmap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, bind_addr = %config.bind_addr, "starting repmap-server");

    let payload = repmap_core::load_payload(config.payload_path.as_deref())?;

    let client = BoundaryClient::new(config.boundary_timeout_secs, &config.user_agent)?;
    let map = load_map(&client, &config.boundary_url).await;

    let snapshot = Snapshot::build(payload, map, config.host.clone());
    let app = build_app(AppState {
        snapshot: Arc::new(snapshot),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
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
