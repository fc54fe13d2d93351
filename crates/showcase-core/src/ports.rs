//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `showcase-core` (pure Rust).
//! Implementations live in `showcase-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use showcase_types::Result;

// ─── Chat Completion Port ────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatCompletionPort {
    /// Send one user message upstream and return the reply text.
    /// The fixed system prompt is attached by the proxy.
    async fn complete(&self, message: &str) -> Result<String>;
}

// ─── Speech Port ─────────────────────────────────────────────

/// Encoded audio returned by the text-to-speech endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl AudioClip {
    pub fn mpeg(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: "audio/mpeg".to_string(),
        }
    }
}

#[async_trait(?Send)]
pub trait SpeechPort {
    async fn synthesize(&self, text: &str) -> Result<AudioClip>;
}

// ─── Audio Port ──────────────────────────────────────────────

/// The single shared playback handle. Playing a clip replaces
/// whatever was playing before.
pub trait AudioPort {
    fn play(&self, clip: AudioClip) -> Result<()>;

    /// Stop playback. No-op when nothing is playing.
    fn stop(&self);

    fn is_playing(&self) -> bool;
}

// ─── Timer / Clock Ports ─────────────────────────────────────

#[async_trait(?Send)]
pub trait TimerPort {
    async fn sleep(&self, millis: u32);
}

pub trait ClockPort {
    /// Current local calendar date
    fn today(&self) -> NaiveDate;
}

// ─── Storage Port ────────────────────────────────────────────

/// String key-value store (browser localStorage semantics).
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Cookie Port ─────────────────────────────────────────────

pub trait CookiePort {
    /// The raw `name=value; name2=value2` cookie string
    fn cookie_header(&self) -> Result<String>;

    /// Write one cookie assignment (`name=value; Max-Age=...; Path=/`)
    fn write(&self, assignment: &str) -> Result<()>;
}

// ─── Gate Verifier Port ──────────────────────────────────────

#[async_trait(?Send)]
pub trait GateVerifierPort {
    /// `Ok(false)` on a wrong password, `Err` when the check itself failed
    async fn verify(&self, password: &str) -> Result<bool>;
}
