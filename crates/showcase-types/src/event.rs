use serde::{Deserialize, Serialize};

use crate::consent::ConsentState;
use crate::message::ChatMessage;
use crate::quota::QuotaStatus;

/// Events emitted by the site runtime.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SiteEvent {
    /// A chat exchange was accepted and the upstream call is in flight
    ExchangeStarted { exchange_id: u64 },

    /// The user's message was appended to the transcript
    UserMessage { message: ChatMessage },

    /// Reply arrived; the widget is simulating typing
    TypingStarted { exchange_id: u64 },

    /// A bot message (reply or generic failure) was appended
    BotMessage { message: ChatMessage },

    /// The chat call failed; carries the underlying error for logs/status
    ExchangeFailed { exchange_id: u64, error: String },

    /// The exchange is over and the widget is idle again
    ExchangeEnded { exchange_id: u64 },

    /// Remaining daily quota changed (or was loaded)
    QuotaUpdated { status: QuotaStatus },

    /// Audio playback of a bot message began
    SpeechStarted,

    /// Audio playback was stopped
    SpeechStopped,

    /// Text-to-speech failed; transcript is unaffected
    SpeechFailed { error: String },

    /// Transcript was cleared back to the greeting
    TranscriptReset { greeting: ChatMessage },

    /// The access gate accepted the password
    GateUnlocked,

    /// The access gate rejected the password
    GateRejected { message: String },

    /// The cookie consent decision changed
    ConsentChanged { state: ConsentState },

    /// An error occurred
    Error { message: String },
}
