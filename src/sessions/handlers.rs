use crate::app_context::AppContext;
use crate::map::models::LatLng;
use crate::sessions::services::http::{CreateSessionHttpHandler, SessionHttpHandler};
use crate::sessions::services::responses::{CloseSessionResponse, SessionResponse};
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResponse> {
    let response = CreateSessionHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn state(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResponse> {
    let response = SessionHttpHandler::new(app_context, &session_id)
        .state()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn guess(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(point): Json<LatLng>,
) -> Json<SessionResponse> {
    let response = SessionHttpHandler::new(app_context, &session_id)
        .guess(point)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn submit(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResponse> {
    let response = SessionHttpHandler::new(app_context, &session_id)
        .submit()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn restart(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResponse> {
    let response = SessionHttpHandler::new(app_context, &session_id)
        .restart()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn close(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<CloseSessionResponse> {
    let response = SessionHttpHandler::new(app_context, &session_id)
        .close()
        .await;
    Json(response)
}
