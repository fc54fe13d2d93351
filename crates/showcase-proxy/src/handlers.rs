use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ProxyError;
use crate::AppState;

#[derive(Deserialize)]
pub struct GateRequest {
    pub password: String,
}

#[derive(Serialize)]
pub struct GateReply {
    pub ok: bool,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Deserialize)]
pub struct SpeechRequest {
    pub text: String,
}

/// Byte-for-byte comparison without an early exit on the first mismatch
pub(crate) fn secrets_match(given: &str, expected: &str) -> bool {
    let (a, b) = (given.as_bytes(), expected.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub async fn gate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GateRequest>,
) -> Result<Json<GateReply>, ProxyError> {
    if req.password.is_empty() {
        return Err(ProxyError::BadRequest("empty password".to_string()));
    }
    if !secrets_match(&req.password, state.config.gate.password.expose()) {
        log::info!("Gate: wrong password");
        return Err(ProxyError::Unauthorized);
    }
    log::info!("Gate: unlocked");
    Ok(Json(GateReply { ok: true }))
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ProxyError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(ProxyError::BadRequest("empty message".to_string()));
    }
    let limit = state.config.chat.max_message_chars;
    if message.chars().count() > limit {
        return Err(ProxyError::BadRequest(format!(
            "message longer than {} characters",
            limit
        )));
    }

    let reply = state.chat.complete(message).await?;
    log::debug!("Chat: {} chars in, {} chars out", message.len(), reply.len());
    Ok(Json(ChatReply { reply }))
}

pub async fn speech(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeechRequest>,
) -> Result<Response, ProxyError> {
    if req.text.trim().is_empty() {
        return Err(ProxyError::BadRequest("empty text".to_string()));
    }
    let limit = state.config.speech.max_text_chars;
    if req.text.chars().count() > limit {
        return Err(ProxyError::BadRequest(format!(
            "text longer than {} characters",
            limit
        )));
    }

    let audio = state.speech.synthesize(&req.text).await?;
    log::debug!("Speech: {} bytes of {}", audio.bytes.len(), audio.content_type);
    Ok(([(CONTENT_TYPE, audio.content_type)], audio.bytes).into_response())
}

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
