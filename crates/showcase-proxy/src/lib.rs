//! Showcase credential proxy.
//!
//! Holds the site password and both third-party API keys so that none of
//! them ship to the browser. The WASM site calls `/api/gate`, `/api/chat`
//! and `/api/speech` here; this process calls the upstream APIs.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod upstream;


use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::ProxyConfig;
use crate::upstream::{ChatClient, SpeechClient};

/// Shared state for all handlers. One `reqwest::Client` backs both
/// upstream clients.
pub struct AppState {
    pub config: ProxyConfig,
    pub chat: ChatClient,
    pub speech: SpeechClient,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            chat: ChatClient::new(http.clone(), config.chat.clone()),
            speech: SpeechClient::new(http, config.speech.clone()),
            config,
        })
    }
}

/// Build the proxy router: API routes, CORS and optional static files.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    let api = Router::new()
        .route("/api/gate", post(handlers::gate))
        .route("/api/chat", post(handlers::chat))
        .route("/api/speech", post(handlers::speech))
        .route("/healthz", get(handlers::healthz));

    let app = match &state.config.static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    app.layer(cors).with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let list: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(list))
}
