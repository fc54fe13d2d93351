use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Handler errors. The browser only ever sees a generic body; the
/// details go to the log.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("wrong password")]
    Unauthorized,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("upstream response malformed: {0}")]
    UpstreamPayload(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Unauthorized => StatusCode::UNAUTHORIZED,
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(_)
            | ProxyError::UpstreamStatus { .. }
            | ProxyError::UpstreamPayload(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ProxyError::Unauthorized => json!({ "ok": false }),
            ProxyError::BadRequest(_) => {
                log::debug!("{}", self);
                json!({ "error": "invalid request" })
            }
            _ => {
                log::error!("{}", self);
                json!({ "error": "upstream unavailable" })
            }
        };
        (status, Json(body)).into_response()
    }
}
