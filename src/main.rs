mod api_doc;
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod state;

use config::Config;
use state::AppState;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("devops-assignment-api starting");

    // Missing .env is fine; real environment variables win either way.
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.log_startup();
    for path in api_doc::ApiDoc::openapi().paths.paths.keys() {
        tracing::info!("  Route: GET {}", path);
    }

    let bind_addr = config.bind_addr();
    let port = config.service_port;
    let app = routes::create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server running on port {}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
