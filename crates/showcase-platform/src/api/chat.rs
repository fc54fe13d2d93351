use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use showcase_core::ports::ChatCompletionPort;
use showcase_types::{config::ProxyEndpoints, Result, SiteError};

use super::{describe_failure, post_json};

/// `POST /api/chat {"message"}` → `{"reply"}`
pub struct ProxyChatClient {
    url: String,
}

impl ProxyChatClient {
    pub fn new(endpoints: &ProxyEndpoints) -> Self {
        Self {
            url: endpoints.chat_url(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReplyBody {
    reply: String,
}

#[async_trait(?Send)]
impl ChatCompletionPort for ProxyChatClient {
    async fn complete(&self, message: &str) -> Result<String> {
        let response = post_json(&self.url, &ChatRequestBody { message }).await?;

        if !response.ok() {
            return Err(SiteError::Chat(describe_failure(response).await));
        }

        let body: ChatReplyBody = response
            .json()
            .await
            .map_err(|e| SiteError::Chat(e.to_string()))?;
        Ok(body.reply)
    }
}
