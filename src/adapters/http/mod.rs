mod error;
mod handlers;
mod state;

pub use error::{status_for, ApiError};

use axum::routing::{delete, get, post};
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::LocationUseCases;

pub fn build_router(service: Arc<dyn LocationUseCases>) -> Router {
    let state = Arc::new(AppState { service });

    Router::new()
        .route("/", get(handlers::hello))
        .route(
            "/locations",
            post(handlers::create_location).get(handlers::list_locations),
        )
        .route("/locations/", delete(handlers::delete_without_name))
        .route(
            "/locations/nearest",
            get(handlers::nearest_location).delete(handlers::delete_location_named_nearest),
        )
        .route("/locations/{name}", delete(handlers::delete_location))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve until Ctrl+C or SIGTERM, letting in-flight requests finish.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Geolocation service listening on http://{}", addr);
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
    tracing::info!("Shutdown signal received");
}
