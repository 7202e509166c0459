use crate::client::PredictionClient;
use crate::server::{routes, static_files};
use axum::{routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared state of the form server
#[derive(Clone)]
pub struct UiState {
    pub client: Arc<PredictionClient>,
}

/// Build the Axum application
pub fn build_app(client: PredictionClient) -> Router {
    let state = UiState {
        client: Arc::new(client),
    };

    Router::new()
        .route("/", get(routes::index).post(routes::submit))
        .route("/health", get(routes::health))
        .route("/static/*path", get(static_files::serve_static))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server
pub async fn run_server(client: PredictionClient, addr: SocketAddr) -> anyhow::Result<()> {
    tracing::info!("Forwarding predictions to {}", client.url());
    let app = build_app(client);

    tracing::info!("Starting Iris form server on {}", addr);
    tracing::info!("Open http://{} in your browser", addr);

    let listener = TcpListener::bind(addr).await?;
    serve(listener, app, shutdown_signal()).await
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain in-flight requests
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Form server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("Shutdown signal received, stopping form server...");
}
