//! WASM-target tests for showcase-platform (Node.js runtime).
//!
//! Tests MemoryStorage, MemoryCookieJar, the timer and the clock under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage, document.cookie and <audio> need a browser; under Node
//! the auto-detection falls back to memory.

use wasm_bindgen_test::*;

use showcase_core::consent::ConsentManager;
use showcase_core::event_bus::EventBus;
use showcase_core::ports::{ClockPort, CookiePort, StoragePort, TimerPort};
use showcase_core::quota::QuotaTracker;
use showcase_platform::clock::LocalClock;
use showcase_platform::cookie::MemoryCookieJar;
use showcase_platform::fingerprint::browser_fingerprint;
use showcase_platform::storage::{auto_detect_storage, MemoryStorage};
use showcase_platform::timer::BrowserTimer;
use showcase_types::consent::{format_consent_cookie, ConsentState};
use std::rc::Rc;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    let result = storage.get("nonexistent").await.unwrap();
    assert!(result.is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_set_and_get() {
    let storage = MemoryStorage::new();
    storage.set("showcase:authenticated", "true").await.unwrap();
    let result = storage.get("showcase:authenticated").await.unwrap();
    assert_eq!(result.as_deref(), Some("true"));
}

#[wasm_bindgen_test]
async fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", "1").await.unwrap();
    storage.set("key", "2").await.unwrap();
    assert_eq!(storage.get("key").await.unwrap().as_deref(), Some("2"));
    assert_eq!(storage.len(), 1);
}

#[wasm_bindgen_test]
async fn memory_storage_delete() {
    let storage = MemoryStorage::new();
    storage.set("key", "val").await.unwrap();
    storage.delete("key").await.unwrap();
    assert!(storage.get("key").await.unwrap().is_none());
    assert!(storage.is_empty());
}

#[wasm_bindgen_test]
async fn memory_storage_delete_nonexistent() {
    let storage = MemoryStorage::new();
    storage.delete("nonexistent").await.unwrap();
}

#[wasm_bindgen_test]
async fn memory_storage_exists() {
    let storage = MemoryStorage::new();
    assert!(!storage.exists("key").await.unwrap());
    storage.set("key", "").await.unwrap();
    assert!(storage.exists("key").await.unwrap());
}

#[wasm_bindgen_test]
fn auto_detect_falls_back_without_window() {
    let storage = auto_detect_storage();
    assert_eq!(storage.backend_name(), "memory");
}

// ─── MemoryCookieJar Tests ───────────────────────────────

#[wasm_bindgen_test]
fn cookie_jar_starts_empty() {
    let jar = MemoryCookieJar::new();
    assert_eq!(jar.cookie_header().unwrap(), "");
}

#[wasm_bindgen_test]
fn cookie_jar_write_strips_attributes() {
    let jar = MemoryCookieJar::new();
    let assignment = format_consent_cookie(ConsentState::Accepted).unwrap();
    jar.write(&assignment).unwrap();
    assert_eq!(
        jar.cookie_header().unwrap(),
        "showcase_cookie_consent=accepted"
    );
}

#[wasm_bindgen_test]
fn cookie_jar_joins_multiple() {
    let jar = MemoryCookieJar::new();
    jar.write("a=1; Path=/").unwrap();
    jar.write("b=2").unwrap();
    assert_eq!(jar.cookie_header().unwrap(), "a=1; b=2");
}

#[wasm_bindgen_test]
fn cookie_jar_max_age_zero_deletes() {
    let jar = MemoryCookieJar::new();
    jar.write("a=1").unwrap();
    jar.write("a=; Max-Age=0; Path=/").unwrap();
    assert_eq!(jar.cookie_header().unwrap(), "");
}

#[wasm_bindgen_test]
fn cookie_jar_rejects_malformed() {
    let jar = MemoryCookieJar::new();
    assert!(jar.write("no-equals-sign").is_err());
}

#[wasm_bindgen_test]
fn consent_manager_over_cookie_jar() {
    let jar = Rc::new(MemoryCookieJar::new());
    let manager = ConsentManager::new(jar.clone(), EventBus::new());
    assert!(manager.banner_visible());

    manager.decline().unwrap();

    assert_eq!(manager.current(), ConsentState::Declined);
    assert!(!manager.banner_visible());
    assert!(jar.cookie_header().unwrap().contains("declined"));
}

// ─── Timer / Clock Tests ─────────────────────────────────

#[wasm_bindgen_test]
async fn browser_timer_sleeps() {
    BrowserTimer.sleep(5).await;
}

#[wasm_bindgen_test]
async fn quota_tracker_over_platform_adapters() {
    let storage = Rc::new(MemoryStorage::new());
    let quota = QuotaTracker::new(storage.clone(), Rc::new(LocalClock), 5);

    let status = quota.record_exchange().await.unwrap();
    assert_eq!(status.remaining(), 4);

    let today = LocalClock.today().format("%Y-%m-%d").to_string();
    let stored = storage.get("showcase:chat_request_date").await.unwrap();
    assert_eq!(stored, Some(today));
}

// ─── Fingerprint Tests ───────────────────────────────────

#[wasm_bindgen_test]
fn browser_fingerprint_needs_a_window() {
    // Computed only on demand; under Node there is nothing to read.
    assert!(browser_fingerprint().is_err());
}
