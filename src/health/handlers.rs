use crate::app_context::AppContext;
use crate::health::responses::HealthCheckResponse;
use crate::storage::interface::SessionRepo;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn healthcheck(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        error: false,
        dataset: app_context.dataset.status(),
        sessions: app_context.sessions.count().await,
    })
}
