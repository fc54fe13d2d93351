use async_trait::async_trait;
use serde::Serialize;

use showcase_core::ports::GateVerifierPort;
use showcase_types::{config::ProxyEndpoints, Result, SiteError};

use super::{describe_failure, post_json};

/// `POST /api/gate {"password"}` → 200 on match, 401 on mismatch
pub struct ProxyGateVerifier {
    url: String,
}

impl ProxyGateVerifier {
    pub fn new(endpoints: &ProxyEndpoints) -> Self {
        Self {
            url: endpoints.gate_url(),
        }
    }
}

#[derive(Serialize)]
struct GateRequestBody<'a> {
    password: &'a str,
}

#[async_trait(?Send)]
impl GateVerifierPort for ProxyGateVerifier {
    async fn verify(&self, password: &str) -> Result<bool> {
        let response = post_json(&self.url, &GateRequestBody { password }).await?;

        match response.status() {
            200..=299 => Ok(true),
            401 | 403 => Ok(false),
            _ => Err(SiteError::Network(describe_failure(response).await)),
        }
    }
}
