//! Client-side security heuristics.
//!
//! These helpers are inert: nothing in the gate, quota or chat paths
//! consults them. They are pure and kept for forms and diagnostics.

use std::sync::OnceLock;

use regex::Regex;

// ─── Password strength ───────────────────────────────────────

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

/// Which strength criteria a password meets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordCheck {
    pub min_length: bool,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordCheck {
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            has_lowercase: password.chars().any(|c| c.is_lowercase()),
            has_uppercase: password.chars().any(|c| c.is_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password
                .chars()
                .any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
        }
    }

    /// Number of criteria met, 0..=5
    pub fn score(&self) -> u8 {
        [
            self.min_length,
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_special,
        ]
        .iter()
        .filter(|passed| **passed)
        .count() as u8
    }

    pub fn strength(&self) -> PasswordStrength {
        match self.score() {
            5 => PasswordStrength::Strong,
            3 | 4 if self.min_length => PasswordStrength::Medium,
            _ => PasswordStrength::Weak,
        }
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    PasswordCheck::evaluate(password).strength()
}

// ─── Email format ────────────────────────────────────────────

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email.len() <= 254 && !email.contains("..") && email_regex().is_match(email)
}

// ─── Bot detection ───────────────────────────────────────────

/// Score at or above which a session is treated as automated
pub const BOT_SCORE_THRESHOLD: u8 = 50;

/// Counts pointer and keyboard activity for a naive "is this a human"
/// score. One instance per page, fed from DOM event handlers.
#[derive(Debug, Clone, Default)]
pub struct BotDetector {
    mouse_moves: u32,
    key_presses: u32,
}

impl BotDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_mouse_move(&mut self) {
        self.mouse_moves = self.mouse_moves.saturating_add(1);
    }

    pub fn record_key_press(&mut self) {
        self.key_presses = self.key_presses.saturating_add(1);
    }

    pub fn mouse_moves(&self) -> u32 {
        self.mouse_moves
    }

    pub fn key_presses(&self) -> u32 {
        self.key_presses
    }

    /// 0 (human-like) to 100 (automated), given how long the page has
    /// been open.
    pub fn score(&self, elapsed_ms: u64) -> u8 {
        let mut score: u32 = 0;
        if self.mouse_moves == 0 {
            score += 40;
        }
        if self.key_presses == 0 {
            score += 20;
        }
        if elapsed_ms < 2_000 {
            score += 30;
        }
        // Faster than ~30ms per key is not typing.
        if self.key_presses > 5 && elapsed_ms / u64::from(self.key_presses) < 30 {
            score += 30;
        }
        score.min(100) as u8
    }

    pub fn looks_automated(&self, elapsed_ms: u64) -> bool {
        self.score(elapsed_ms) >= BOT_SCORE_THRESHOLD
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ─── Browser fingerprint ─────────────────────────────────────

/// Navigator and screen properties that feed the fingerprint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintInputs {
    pub user_agent: String,
    pub language: String,
    pub platform: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub color_depth: u32,
    pub timezone_offset_minutes: i32,
    pub hardware_concurrency: u32,
}

impl FingerprintInputs {
    fn canonical(&self) -> String {
        format!(
            "{}|{}|{}|{}x{}x{}|{}|{}",
            self.user_agent,
            self.language,
            self.platform,
            self.screen_width,
            self.screen_height,
            self.color_depth,
            self.timezone_offset_minutes,
            self.hardware_concurrency
        )
    }
}

/// 32-bit rolling hash (`h = h * 31 + c`) of the canonical inputs, as
/// eight hex digits. Stable, not collision resistant.
pub fn fingerprint_hash(inputs: &FingerprintInputs) -> String {
    let hash = inputs
        .canonical()
        .encode_utf16()
        .fold(0i32, |h, unit| {
            h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
        });
    format!("{:08x}", hash as u32)
}
