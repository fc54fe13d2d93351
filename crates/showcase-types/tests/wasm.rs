//! WASM-target tests for showcase-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use showcase_types::config::*;
use showcase_types::consent::*;
use showcase_types::error::*;
use showcase_types::event::*;
use showcase_types::message::*;
use showcase_types::quota::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = ChatMessage::user("Hallo");
    assert_eq!(msg.author, Author::User);
    assert_eq!(msg.text, "Hallo");
    assert!(!msg.is_error);
}

#[wasm_bindgen_test]
fn message_bot_error() {
    let msg = ChatMessage::bot_error("Fehler");
    assert!(msg.is_bot());
    assert!(msg.is_error);
}

#[wasm_bindgen_test]
fn message_ids_are_unique() {
    // uuid v4 draws from crypto.getRandomValues in the browser
    let a = ChatMessage::user("x");
    let b = ChatMessage::user("x");
    assert_ne!(a.id, b.id);
}

#[wasm_bindgen_test]
fn message_serialization_roundtrip() {
    let msg = ChatMessage::bot("Antwort");
    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains(r#""author":"bot""#));
    let back: ChatMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(back, msg);
}

// ─── Quota Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn quota_remaining_saturates() {
    let status = QuotaStatus::new(7, 5);
    assert_eq!(status.remaining(), 0);
    assert!(status.is_exhausted());
}

// ─── Config Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn config_defaults() {
    let config = SiteConfig::default();
    assert_eq!(config.chat.daily_limit, 5);
    assert_eq!(config.chat.typing_delay_ms, 1500);
    assert!(!config.gate.remember_unlock);
    assert_eq!(config.proxy.chat_url(), "/api/chat");
}

#[wasm_bindgen_test]
fn config_partial_json() {
    let config: SiteConfig =
        serde_json::from_str(r#"{"proxy":{"base_url":"https://api.example.de/"}}"#).unwrap();
    assert_eq!(config.proxy.speech_url(), "https://api.example.de/api/speech");
    assert_eq!(config.chat.daily_limit, 5);
}

// ─── Consent Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn consent_cookie_roundtrip() {
    let assignment = format_consent_cookie(ConsentState::Accepted).unwrap();
    let pair = assignment.split(';').next().unwrap();
    assert_eq!(
        ConsentState::from_cookie_value(parse_cookie(pair, CONSENT_COOKIE_NAME)),
        ConsentState::Accepted
    );
}

// ─── Event / Error Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn event_serialization() {
    let event = SiteEvent::QuotaUpdated {
        status: QuotaStatus::new(1, 5),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("QuotaUpdated"));
}

#[wasm_bindgen_test]
fn error_display() {
    let err = SiteError::Network("timeout".to_string());
    assert_eq!(err.to_string(), "Network error: timeout");
    assert!(SiteError::EmptyInput.is_validation());
}
