//! Cookie consent tri-state and the cookie string helpers around it.

use serde::{Deserialize, Serialize};

pub const CONSENT_COOKIE_NAME: &str = "showcase_cookie_consent";
pub const CONSENT_MAX_AGE_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConsentState {
    /// No decision yet; the banner is shown
    #[default]
    Unset,
    Accepted,
    Declined,
}

impl ConsentState {
    /// Map a stored cookie value. Unknown values count as undecided.
    pub fn from_cookie_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("accepted") => ConsentState::Accepted,
            Some("declined") => ConsentState::Declined,
            _ => ConsentState::Unset,
        }
    }

    pub fn cookie_value(&self) -> Option<&'static str> {
        match self {
            ConsentState::Unset => None,
            ConsentState::Accepted => Some("accepted"),
            ConsentState::Declined => Some("declined"),
        }
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, ConsentState::Unset)
    }
}

/// Find a cookie in a `document.cookie` style string (`a=1; b=2`).
pub fn parse_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Build the assignment string written to `document.cookie`.
pub fn format_cookie(name: &str, value: &str, max_age_days: u32) -> String {
    let max_age_secs = u64::from(max_age_days) * 24 * 60 * 60;
    format!(
        "{}={}; Max-Age={}; Path=/; SameSite=Lax",
        name, value, max_age_secs
    )
}

/// Cookie assignment for a consent decision, or `None` for `Unset`.
pub fn format_consent_cookie(state: ConsentState) -> Option<String> {
    state
        .cookie_value()
        .map(|v| format_cookie(CONSENT_COOKIE_NAME, v, CONSENT_MAX_AGE_DAYS))
}
