use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{health, http, sessions};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapSessionsStorage>) -> Router {
    let cors_policy = http::init(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::create))
        .route(
            "/:session-id",
            get(sessions::handlers::state).delete(sessions::handlers::close),
        )
        .route("/:session-id/guess", post(sessions::handlers::guess))
        .route("/:session-id/submit", post(sessions::handlers::submit))
        .route("/:session-id/restart", post(sessions::handlers::restart));

    Router::new()
        .nest("/health", health_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(http::middleware::tracing))
}
