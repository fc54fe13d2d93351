//! UI-level state that drives rendering.
//! This is a read-only projection of the orchestrator, gate and consent
//! manager, updated each frame by draining the EventBus.

use showcase_core::orchestrator::ChatState;
use showcase_types::consent::ConsentState;
use showcase_types::event::SiteEvent;
use showcase_types::message::ChatMessage;
use showcase_types::quota::QuotaStatus;

pub const STATUS_READY: &str = "Bereit";
pub const STATUS_WAITING: &str = "Denkt nach...";
pub const STATUS_TYPING: &str = "Schreibt...";
pub const STATUS_CHAT_FAILED: &str = "Verbindung fehlgeschlagen";
pub const STATUS_SPEECH_FAILED: &str = "Sprachausgabe nicht verfügbar";

/// State visible to UI panels
pub struct UiState {
    /// Displayed transcript, greeting first
    pub messages: Vec<ChatMessage>,
    /// Mirrors the orchestrator state machine
    pub chat_status: ChatState,
    /// Exchange the status belongs to; events for other ids are stale
    pub active_exchange: Option<u64>,
    /// `None` until the first quota load
    pub quota: Option<QuotaStatus>,
    pub voice_enabled: bool,
    /// Refreshed from the audio handle each frame
    pub speaking: bool,
    /// Chat input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,

    pub gate_unlocked: bool,
    /// A password check is in flight
    pub gate_checking: bool,
    pub gate_error: Option<String>,
    pub password_input: String,

    pub consent: ConsentState,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            chat_status: ChatState::Idle,
            active_exchange: None,
            quota: None,
            voice_enabled: false,
            speaking: false,
            input_text: String::new(),
            status_text: STATUS_READY.to_string(),
            gate_unlocked: false,
            gate_checking: false,
            gate_error: None,
            password_input: String::new(),
            consent: ConsentState::Unset,
        }
    }

    /// Start from the orchestrator's opening transcript
    pub fn with_transcript(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Self::new()
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SiteEvent>) {
        for event in events {
            match event {
                SiteEvent::ExchangeStarted { exchange_id } => {
                    self.active_exchange = Some(exchange_id);
                    self.chat_status = ChatState::AwaitingResponse;
                    self.status_text = STATUS_WAITING.to_string();
                }
                SiteEvent::UserMessage { message } | SiteEvent::BotMessage { message } => {
                    self.messages.push(message);
                }
                SiteEvent::TypingStarted { exchange_id } => {
                    if self.active_exchange != Some(exchange_id) {
                        continue;
                    }
                    self.chat_status = ChatState::Typing;
                    self.status_text = STATUS_TYPING.to_string();
                }
                SiteEvent::ExchangeFailed { exchange_id, .. } => {
                    if self.active_exchange != Some(exchange_id) {
                        continue;
                    }
                    log::debug!("Exchange {} failed", exchange_id);
                    self.status_text = STATUS_CHAT_FAILED.to_string();
                }
                SiteEvent::ExchangeEnded { exchange_id } => {
                    if self.active_exchange != Some(exchange_id) {
                        log::debug!("Ignoring end of stale exchange {}", exchange_id);
                        continue;
                    }
                    self.active_exchange = None;
                    self.chat_status = ChatState::Idle;
                    if self.status_text != STATUS_CHAT_FAILED {
                        self.status_text = STATUS_READY.to_string();
                    }
                }
                SiteEvent::QuotaUpdated { status } => {
                    self.quota = Some(status);
                }
                SiteEvent::SpeechStarted => {
                    self.speaking = true;
                }
                SiteEvent::SpeechStopped => {
                    self.speaking = false;
                }
                SiteEvent::SpeechFailed { .. } => {
                    self.speaking = false;
                    self.status_text = STATUS_SPEECH_FAILED.to_string();
                }
                SiteEvent::TranscriptReset { greeting } => {
                    self.messages = vec![greeting];
                    self.active_exchange = None;
                    self.chat_status = ChatState::Idle;
                    self.speaking = false;
                    self.status_text = STATUS_READY.to_string();
                }
                SiteEvent::GateUnlocked => {
                    self.gate_unlocked = true;
                    self.gate_checking = false;
                    self.gate_error = None;
                    self.password_input.clear();
                }
                SiteEvent::GateRejected { message } => {
                    self.gate_checking = false;
                    self.gate_error = Some(message);
                }
                SiteEvent::ConsentChanged { state } => {
                    self.consent = state;
                }
                SiteEvent::Error { message } => {
                    self.status_text = format!("Fehler: {}", message);
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.chat_status != ChatState::Idle
    }

    pub fn remaining(&self) -> Option<u32> {
        self.quota.map(|q| q.remaining())
    }

    pub fn quota_exhausted(&self) -> bool {
        self.quota.is_some_and(|q| q.is_exhausted())
    }

    /// Send is offered only when idle, with quota left and non-blank input
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.quota_exhausted() && !self.input_text.trim().is_empty()
    }

    pub fn consent_banner_visible(&self) -> bool {
        !self.consent.is_decided()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
