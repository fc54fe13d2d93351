//! Clients for the credential proxy.
//!
//! The browser never sees an upstream key: every call goes to the
//! proxy's `/api/*` routes via `fetch()` (gloo-net).

pub mod chat;
pub mod gate;
pub mod speech;

pub use chat::ProxyChatClient;
pub use gate::ProxyGateVerifier;
pub use speech::ProxySpeechClient;

use gloo_net::http::{Request, Response};
use serde::Serialize;

use showcase_types::{Result, SiteError};

/// POST `body` as JSON. Only transport failures are errors here; the
/// caller inspects the status.
async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<Response> {
    Request::post(url)
        .json(body)
        .map_err(|e| SiteError::Serialization(e.to_string()))?
        .send()
        .await
        .map_err(|e| SiteError::Network(e.to_string()))
}

/// `HTTP <status>: <body>` for a non-2xx response
async fn describe_failure(response: Response) -> String {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    format!("HTTP {}: {}", status, text)
}
