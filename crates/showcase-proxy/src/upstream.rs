//! Clients for the two third-party APIs. Single attempt, no retry.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::{ChatSection, SpeechSection};
use crate::error::ProxyError;

/// OpenAI-compatible chat completion with a fixed system prompt
pub struct ChatClient {
    http: Client,
    config: ChatSection,
}

impl ChatClient {
    pub fn new(http: Client, config: ChatSection) -> Self {
        Self { http, config }
    }

    pub async fn complete(&self, user_message: &str) -> Result<String, ProxyError> {
        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": self.config.system_prompt },
                { "role": "user", "content": user_message },
            ],
            "max_tokens": self.config.max_tokens,
        });

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(self.config.api_key.expose())
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let data: CompletionResponse = response.json().await?;
        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProxyError::UpstreamPayload("no choices in response".to_string()))
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Encoded audio and its media type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechAudio {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Text-to-speech with a fixed voice and model
pub struct SpeechClient {
    http: Client,
    config: SpeechSection,
}

impl SpeechClient {
    pub fn new(http: Client, config: SpeechSection) -> Self {
        Self { http, config }
    }

    fn url(&self) -> String {
        format!(
            "{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.voice_id
        )
    }

    pub async fn synthesize(&self, text: &str) -> Result<SpeechAudio, ProxyError> {
        let body = json!({
            "text": text,
            "model_id": self.config.model_id,
            "voice_settings": {
                "stability": self.config.stability,
                "similarity_boost": self.config.similarity_boost,
            },
        });

        let response = self
            .http
            .post(self.url())
            .header("xi-api-key", self.config.api_key.expose())
            .header(ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|t| t.starts_with("audio/"))
            .unwrap_or("audio/mpeg")
            .to_string();

        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(ProxyError::UpstreamPayload("empty audio".to_string()));
        }

        Ok(SpeechAudio {
            bytes,
            content_type,
        })
    }
}
