use crate::game::errors::GameError;
use crate::game::session::SessionView;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionView>,
}

impl From<Result<SessionView, GameError>> for SessionResponse {
    fn from(outcome: Result<SessionView, GameError>) -> Self {
        match outcome {
            Ok(session) => SessionResponse {
                error: false,
                error_code: None,
                session: Some(session),
            },
            Err(error_code) => SessionResponse {
                error: true,
                error_code: Some(error_code),
                session: None,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseSessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GameError>,
}
