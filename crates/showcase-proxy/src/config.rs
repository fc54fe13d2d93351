//! Proxy configuration: TOML file, environment overrides, validation.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const ENV_SITE_PASSWORD: &str = "SHOWCASE_SITE_PASSWORD";
pub const ENV_CHAT_API_KEY: &str = "SHOWCASE_CHAT_API_KEY";
pub const ENV_TTS_API_KEY: &str = "SHOWCASE_TTS_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("validation: {0}")]
    Validation(String),
}

/// A credential. Never printed by `Debug`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("\"\"")
        } else {
            f.write_str("\"***\"")
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Socket address to bind
    pub listen: String,
    /// CORS origins; `*` allows any
    pub allowed_origins: Vec<String>,
    /// Serve the built site from here on unmatched paths
    pub static_dir: Option<PathBuf>,
    /// Timeout for each upstream request
    pub request_timeout_secs: u64,
    pub gate: GateSection,
    pub chat: ChatSection,
    pub speech: SpeechSection,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8787".to_string(),
            allowed_origins: vec!["*".to_string()],
            static_dir: None,
            request_timeout_secs: 30,
            gate: GateSection::default(),
            chat: ChatSection::default(),
            speech: SpeechSection::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GateSection {
    pub password: Secret,
}

/// Chat-completion upstream (OpenAI-compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSection {
    pub endpoint: String,
    pub api_key: Secret,
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    /// Sent as `HTTP-Referer`
    pub referer: String,
    /// Sent as `X-Title`
    pub title: String,
    /// Longer user messages are rejected with 400
    pub max_message_chars: usize,
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            endpoint: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            api_key: Secret::default(),
            model: "openai/gpt-4o-mini".to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: 500,
            referer: "https://showcase.example".to_string(),
            title: "Showcase Demo Chat".to_string(),
            max_message_chars: 2000,
        }
    }
}

/// Text-to-speech upstream; the voice id is appended to the endpoint path
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSection {
    pub endpoint: String,
    pub api_key: Secret,
    pub voice_id: String,
    pub model_id: String,
    pub stability: f32,
    pub similarity_boost: f32,
    /// Longer texts are rejected with 400 before reaching the paid upstream
    pub max_text_chars: usize,
}

impl Default for SpeechSection {
    fn default() -> Self {
        Self {
            endpoint: "https://api.elevenlabs.io/v1/text-to-speech".to_string(),
            api_key: Secret::default(),
            voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
            model_id: "eleven_multilingual_v2".to_string(),
            stability: 0.5,
            similarity_boost: 0.75,
            max_text_chars: 2500,
        }
    }
}

const DEFAULT_SYSTEM_PROMPT: &str = "Du bist der freundliche Demo-Assistent eines Anbieters von \
KI-Chatbots. Antworte kurz, hilfsbereit und auf Deutsch.";

impl ProxyConfig {
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(data)?)
    }

    /// Overlay secrets from the environment. `lookup` is `std::env::var`
    /// in production.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_SITE_PASSWORD) {
            self.gate.password = Secret::new(v);
        }
        if let Some(v) = lookup(ENV_CHAT_API_KEY) {
            self.chat.api_key = Secret::new(v);
        }
        if let Some(v) = lookup(ENV_TTS_API_KEY) {
            self.speech.api_key = Secret::new(v);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gate.password.is_empty() {
            return Err(ConfigError::Validation(format!(
                "gate.password is empty (set it in the config file or {})",
                ENV_SITE_PASSWORD
            )));
        }
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::Validation(
                "allowed_origins must list at least one origin".to_string(),
            ));
        }
        if self.chat.api_key.is_empty() {
            log::warn!("chat.api_key is empty; /api/chat will fail upstream");
        }
        if self.speech.api_key.is_empty() {
            log::warn!("speech.api_key is empty; /api/speech will fail upstream");
        }
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<ProxyConfig, ConfigError> {
    let data = fs::read_to_string(path.as_ref())?;
    ProxyConfig::from_toml_str(&data)
}
