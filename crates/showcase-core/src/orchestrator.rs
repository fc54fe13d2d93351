//! Demo chat orchestrator — the widget's state machine.
//!
//! One exchange runs `Idle → AwaitingResponse → Typing → Idle`:
//! 1. Check preconditions (non-empty input, idle, quota left)
//! 2. Append the user message and call the chat-completion port
//! 3. Hold the reply for the typing delay, then append it
//! 4. Charge one unit of quota
//! 5. If voice is on, synthesize the reply and play it
//!
//! `speaking` is orthogonal and read straight from the audio port.
//!
//! All state sits behind a `RefCell` that is never borrowed across an
//! `.await`, so the UI can reset or toggle voice while an exchange is in
//! flight.

use std::cell::RefCell;
use std::rc::Rc;

use showcase_types::{
    config::ChatWidgetConfig,
    event::SiteEvent,
    message::ChatMessage,
    quota::QuotaStatus,
    Result, SiteError,
};

use crate::event_bus::EventBus;
use crate::ports::*;
use crate::quota::QuotaTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingResponse,
    Typing,
}

/// How an accepted exchange ended
#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeOutcome {
    /// The upstream reply was appended
    Replied(ChatMessage),
    /// The generic error message was appended instead
    Failed(ChatMessage),
    /// The transcript was reset while the exchange was in flight
    Discarded,
}

/// Adapters the orchestrator drives
#[derive(Clone)]
pub struct ChatPorts {
    pub chat: Rc<dyn ChatCompletionPort>,
    pub speech: Rc<dyn SpeechPort>,
    pub audio: Rc<dyn AudioPort>,
    pub timer: Rc<dyn TimerPort>,
}

struct ChatSession {
    transcript: Vec<ChatMessage>,
    state: ChatState,
    voice_enabled: bool,
    /// Last real bot reply, replayed when voice gets switched on
    last_reply: Option<String>,
    exchange_counter: u64,
    /// Bumped on reset so late replies from older exchanges are dropped
    epoch: u64,
}

pub struct ChatOrchestrator {
    config: ChatWidgetConfig,
    event_bus: EventBus,
    quota: QuotaTracker,
    ports: ChatPorts,
    session: RefCell<ChatSession>,
}

impl ChatOrchestrator {
    pub fn new(
        config: ChatWidgetConfig,
        event_bus: EventBus,
        quota: QuotaTracker,
        ports: ChatPorts,
    ) -> Self {
        let session = ChatSession {
            transcript: vec![ChatMessage::bot(&config.greeting)],
            state: ChatState::Idle,
            voice_enabled: config.voice_enabled_by_default,
            last_reply: None,
            exchange_counter: 0,
            epoch: 0,
        };

        Self {
            config,
            event_bus,
            quota,
            ports,
            session: RefCell::new(session),
        }
    }

    /// Apply the day rollover and publish the current quota.
    pub async fn load(&self) -> Result<QuotaStatus> {
        let status = self.quota.status().await?;
        self.event_bus.emit(SiteEvent::QuotaUpdated { status });
        Ok(status)
    }

    /// Run one exchange for `input`.
    ///
    /// Rejections (`EmptyInput`, `Busy`, `QuotaExhausted`) leave the
    /// transcript untouched and issue no outbound call. Upstream failures
    /// are not errors here: they end as `ExchangeOutcome::Failed`.
    pub async fn submit(&self, input: &str) -> Result<ExchangeOutcome> {
        let text = input.trim();
        if text.is_empty() {
            return Err(SiteError::EmptyInput);
        }

        // Claim the widget before the first await so overlapping submits bounce.
        {
            let mut session = self.session.borrow_mut();
            if session.state != ChatState::Idle {
                return Err(SiteError::Busy);
            }
            session.state = ChatState::AwaitingResponse;
        }

        let status = match self.quota.status().await {
            Ok(status) => status,
            Err(e) => {
                self.session.borrow_mut().state = ChatState::Idle;
                return Err(e);
            }
        };
        if status.is_exhausted() {
            self.session.borrow_mut().state = ChatState::Idle;
            self.event_bus.emit(SiteEvent::QuotaUpdated { status });
            return Err(SiteError::QuotaExhausted);
        }

        let user_msg = ChatMessage::user(text);
        let (exchange_id, epoch) = {
            let mut session = self.session.borrow_mut();
            session.exchange_counter += 1;
            session.transcript.push(user_msg.clone());
            (session.exchange_counter, session.epoch)
        };
        self.event_bus.emit(SiteEvent::ExchangeStarted { exchange_id });
        self.event_bus.emit(SiteEvent::UserMessage { message: user_msg });

        let (outcome, charge) = match self.ports.chat.complete(text).await {
            Ok(reply) => {
                if self.set_state_if_current(epoch, ChatState::Typing) {
                    self.event_bus.emit(SiteEvent::TypingStarted { exchange_id });
                }
                self.ports.timer.sleep(self.config.typing_delay_ms).await;

                let bot_msg = ChatMessage::bot(&reply);
                let outcome = if self.append_if_current(epoch, bot_msg.clone()) {
                    self.session.borrow_mut().last_reply = Some(reply);
                    ExchangeOutcome::Replied(bot_msg)
                } else {
                    ExchangeOutcome::Discarded
                };
                (outcome, true)
            }
            Err(e) => {
                log::error!("Demo chat exchange {} failed: {}", exchange_id, e);
                if self.is_current(epoch) {
                    self.event_bus.emit(SiteEvent::ExchangeFailed {
                        exchange_id,
                        error: e.to_string(),
                    });
                }

                let error_msg = ChatMessage::bot_error(&self.config.error_message);
                let outcome = if self.append_if_current(epoch, error_msg.clone()) {
                    ExchangeOutcome::Failed(error_msg)
                } else {
                    ExchangeOutcome::Discarded
                };
                (outcome, self.config.charge_failed_exchanges)
            }
        };

        if charge {
            match self.quota.record_exchange().await {
                Ok(status) => self.event_bus.emit(SiteEvent::QuotaUpdated { status }),
                Err(e) => log::warn!("Failed to record demo chat exchange: {}", e),
            }
        }

        // After a reset the widget belongs to whatever exchange came next.
        if self.set_state_if_current(epoch, ChatState::Idle) {
            self.event_bus.emit(SiteEvent::ExchangeEnded { exchange_id });
        }

        if let ExchangeOutcome::Replied(ref msg) = outcome {
            if self.voice_enabled() {
                // Speech failures are reported through events only.
                let _ = self.speak(&msg.text).await;
            }
        }

        Ok(outcome)
    }

    /// Synthesize `text` and play it on the shared audio handle.
    pub async fn speak(&self, text: &str) -> Result<()> {
        self.stop_speaking();

        let clip = match self.ports.speech.synthesize(text).await {
            Ok(clip) => clip,
            Err(e) => {
                log::warn!("Text-to-speech failed: {}", e);
                self.event_bus.emit(SiteEvent::SpeechFailed {
                    error: e.to_string(),
                });
                return Err(e);
            }
        };

        // Voice may have been switched off while the clip was being fetched.
        if !self.voice_enabled() {
            return Ok(());
        }

        self.ports.audio.play(clip).map_err(|e| {
            self.event_bus.emit(SiteEvent::SpeechFailed {
                error: e.to_string(),
            });
            e
        })?;
        self.event_bus.emit(SiteEvent::SpeechStarted);
        Ok(())
    }

    /// Halt playback immediately.
    pub fn stop_speaking(&self) {
        let was_playing = self.ports.audio.is_playing();
        self.ports.audio.stop();
        if was_playing {
            self.event_bus.emit(SiteEvent::SpeechStopped);
        }
    }

    /// Switch voice output. Turning it on replays the last reply once,
    /// unless an exchange is running (its own reply gets spoken instead);
    /// turning it off stops playback.
    pub async fn set_voice_enabled(&self, enabled: bool) -> Result<()> {
        let (was_enabled, cached) = {
            let mut session = self.session.borrow_mut();
            let was_enabled = session.voice_enabled;
            session.voice_enabled = enabled;
            let cached = match session.state {
                ChatState::Idle => session.last_reply.clone(),
                _ => None,
            };
            (was_enabled, cached)
        };

        if !enabled {
            self.stop_speaking();
            return Ok(());
        }

        if !was_enabled {
            if let Some(text) = cached {
                self.speak(&text).await?;
            }
        }
        Ok(())
    }

    /// Stop audio and clear the transcript back to the greeting.
    /// The quota is left as is.
    pub fn reset(&self) {
        self.stop_speaking();

        let greeting = ChatMessage::bot(&self.config.greeting);
        {
            let mut session = self.session.borrow_mut();
            session.transcript = vec![greeting.clone()];
            session.state = ChatState::Idle;
            session.last_reply = None;
            session.epoch += 1;
        }
        self.event_bus.emit(SiteEvent::TranscriptReset { greeting });
    }

    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.session.borrow().transcript.clone()
    }

    pub fn state(&self) -> ChatState {
        self.session.borrow().state
    }

    pub fn is_busy(&self) -> bool {
        self.state() != ChatState::Idle
    }

    pub fn voice_enabled(&self) -> bool {
        self.session.borrow().voice_enabled
    }

    pub fn is_speaking(&self) -> bool {
        self.ports.audio.is_playing()
    }

    pub async fn quota_status(&self) -> Result<QuotaStatus> {
        self.quota.status().await
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.session.borrow().epoch == epoch
    }

    fn set_state_if_current(&self, epoch: u64, state: ChatState) -> bool {
        let mut session = self.session.borrow_mut();
        if session.epoch != epoch {
            return false;
        }
        session.state = state;
        true
    }

    fn append_if_current(&self, epoch: u64, message: ChatMessage) -> bool {
        {
            let mut session = self.session.borrow_mut();
            if session.epoch != epoch {
                return false;
            }
            session.transcript.push(message.clone());
        }
        self.event_bus.emit(SiteEvent::BotMessage { message });
        true
    }
}
