use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the HTTP server with all routes and middleware
///
/// Unknown paths and unsupported methods on known paths both land on the
/// 404 fallback. JSON bodies are capped at `max_body_bytes`.
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route(
            "/",
            get(handlers::root_handler).fallback(handlers::not_found_handler),
        )
        .route(
            "/health",
            get(handlers::health_handler).fallback(handlers::not_found_handler),
        )
        .route(
            "/compare",
            post(handlers::compare_handler).fallback(handlers::not_found_handler),
        )
        .route(
            "/detect",
            post(handlers::detect_handler).fallback(handlers::not_found_handler),
        )
        .fallback(handlers::not_found_handler)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Bind the listener and serve until the process exits
pub async fn start(port: u16, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Face service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
