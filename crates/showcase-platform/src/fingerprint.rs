//! Collects the navigator and screen properties behind
//! `showcase_core::security::fingerprint_hash`.

use showcase_core::security::{fingerprint_hash, FingerprintInputs};
use showcase_types::{Result, SiteError};

pub fn collect_fingerprint_inputs() -> Result<FingerprintInputs> {
    let window =
        web_sys::window().ok_or_else(|| SiteError::JsInterop("No window object".to_string()))?;
    let navigator = window.navigator();
    let screen = window
        .screen()
        .map_err(|e| SiteError::JsInterop(format!("{:?}", e)))?;

    Ok(FingerprintInputs {
        user_agent: navigator.user_agent().unwrap_or_default(),
        language: navigator.language().unwrap_or_default(),
        platform: navigator.platform().unwrap_or_default(),
        screen_width: screen.width().unwrap_or(0).max(0) as u32,
        screen_height: screen.height().unwrap_or(0).max(0) as u32,
        color_depth: screen.color_depth().unwrap_or(0).max(0) as u32,
        timezone_offset_minutes: js_sys::Date::new_0().get_timezone_offset() as i32,
        hardware_concurrency: navigator.hardware_concurrency() as u32,
    })
}

/// Hash of the current browser's properties
pub fn browser_fingerprint() -> Result<String> {
    collect_fingerprint_inputs().map(|inputs| fingerprint_hash(&inputs))
}
