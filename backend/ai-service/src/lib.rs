use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::{any::Any, sync::Arc};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod services;
pub mod validation;

pub use config::Config;
pub use error::ServiceError;
pub use services::AppState;

/// Turns a handler panic into the generic `internal_error` envelope.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ServiceError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Public: the auth middleware lets this path through
        .route("/health", get(handlers::health_check))
        // Protected: require the shared bearer secret
        .route(
            "/v1/api/generate-questions",
            post(handlers::questions::generate_questions),
        )
        .route("/v1/api/chat", post(handlers::chat::chat))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            middlewares::auth::auth_middleware,
        ))
        .with_state(app_state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(
            middlewares::trace::trace_context_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}
