#![forbid(unsafe_code)]

//! HTTP front end for the fitconsult advice service.
//!
//! Exposes a single `POST /api/consult` endpoint that answers with
//! `{"advice": ...}` or, on any failure, a 500 with `{"error": ...}`.

pub mod error;
pub mod request_id;
pub mod routes;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderName;
use axum::routing::post;
use axum::Router;
use consult_core::config::ServerConfig;
use consult_core::Result;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorResponse, CONSULTATION_FAILED};
pub use request_id::{MakeRequestUuid, REQUEST_ID_HEADER};
pub use routes::{AdviceResponse, CONSULT_PATH};

/// Build the application router
pub fn router(config: &ServerConfig) -> Router {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route(CONSULT_PATH, post(routes::consult))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_id::create_request_span))
                .layer(PropagateRequestIdLayer::new(header)),
        )
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Unable to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
