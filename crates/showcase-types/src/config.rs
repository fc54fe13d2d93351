use serde::{Deserialize, Serialize};

/// Top-level site configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub chat: ChatWidgetConfig,
    pub gate: GateConfig,
    pub proxy: ProxyEndpoints,
}

/// Behaviour of the demo chat widget
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatWidgetConfig {
    /// Exchanges allowed per browser per calendar day
    pub daily_limit: u32,
    /// Artificial "typing" pause before a reply is shown
    pub typing_delay_ms: u32,
    pub greeting: String,
    /// Shown in place of a reply when the chat call fails
    pub error_message: String,
    pub voice_enabled_by_default: bool,
    /// Whether a failed exchange still consumes quota
    pub charge_failed_exchanges: bool,
}

impl Default for ChatWidgetConfig {
    fn default() -> Self {
        Self {
            daily_limit: 5,
            typing_delay_ms: 1500,
            greeting: DEFAULT_GREETING.to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            voice_enabled_by_default: false,
            charge_failed_exchanges: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Keep the unlock flag across page loads. When false the flag is
    /// cleared on every load and the password is asked again.
    pub remember_unlock: bool,
}

/// Where the browser reaches the credential proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyEndpoints {
    /// Empty means same origin
    pub base_url: String,
    pub gate_path: String,
    pub chat_path: String,
    pub speech_path: String,
}

impl Default for ProxyEndpoints {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            gate_path: "/api/gate".to_string(),
            chat_path: "/api/chat".to_string(),
            speech_path: "/api/speech".to_string(),
        }
    }
}

impl ProxyEndpoints {
    pub fn gate_url(&self) -> String {
        join_url(&self.base_url, &self.gate_path)
    }

    pub fn chat_url(&self) -> String {
        join_url(&self.base_url, &self.chat_path)
    }

    pub fn speech_url(&self) -> String {
        join_url(&self.base_url, &self.speech_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

const DEFAULT_GREETING: &str =
    "Hallo! Ich bin der Demo-Assistent. Stell mir eine Frage, ich helfe gern.";

const DEFAULT_ERROR_MESSAGE: &str =
    "Entschuldigung, da ist etwas schiefgelaufen. Bitte versuche es später noch einmal.";
