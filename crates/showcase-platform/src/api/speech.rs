use async_trait::async_trait;
use serde::Serialize;

use showcase_core::ports::{AudioClip, SpeechPort};
use showcase_types::{config::ProxyEndpoints, Result, SiteError};

use super::{describe_failure, post_json};

/// `POST /api/speech {"text"}` → `audio/mpeg` bytes
pub struct ProxySpeechClient {
    url: String,
}

impl ProxySpeechClient {
    pub fn new(endpoints: &ProxyEndpoints) -> Self {
        Self {
            url: endpoints.speech_url(),
        }
    }
}

#[derive(Serialize)]
struct SpeechRequestBody<'a> {
    text: &'a str,
}

#[async_trait(?Send)]
impl SpeechPort for ProxySpeechClient {
    async fn synthesize(&self, text: &str) -> Result<AudioClip> {
        let response = post_json(&self.url, &SpeechRequestBody { text }).await?;

        if !response.ok() {
            return Err(SiteError::Speech(describe_failure(response).await));
        }

        let mime_type = response
            .headers()
            .get("content-type")
            .filter(|t| t.starts_with("audio/"))
            .unwrap_or_else(|| "audio/mpeg".to_string());

        let bytes = response
            .binary()
            .await
            .map_err(|e| SiteError::Speech(e.to_string()))?;
        if bytes.is_empty() {
            return Err(SiteError::Speech("Empty audio response".to_string()));
        }

        Ok(AudioClip { bytes, mime_type })
    }
}
