use super::handlers;
use super::state::AppState;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    let public_dir = state.public_dir.clone();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        // Health checks
        .route("/health", get(handlers::health_check))
        .route("/test", get(handlers::test))
        // Provider webhook
        .route("/voice", post(handlers::voice))
        // Dashboard API
        .route("/logs", get(handlers::list_logs))
        .route("/call-me", post(handlers::call_me))
        // Static pages
        .route_service("/", ServeFile::new(public_dir.join("dashboard.html")))
        .route_service("/about", ServeFile::new(public_dir.join("about.html")))
        .fallback_service(ServeDir::new(public_dir))
        .layer(cors)
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
