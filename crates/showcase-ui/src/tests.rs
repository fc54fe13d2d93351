#[cfg(test)]
mod tests {
    use crate::state::*;
    use showcase_core::orchestrator::ChatState;
    use showcase_types::consent::ConsentState;
    use showcase_types::event::SiteEvent;
    use showcase_types::message::ChatMessage;
    use showcase_types::quota::QuotaStatus;

    fn greeting() -> ChatMessage {
        ChatMessage::bot("Hallo! Wie kann ich helfen?")
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.messages.is_empty());
        assert_eq!(state.chat_status, ChatState::Idle);
        assert!(state.quota.is_none());
        assert!(!state.voice_enabled);
        assert!(!state.speaking);
        assert!(state.input_text.is_empty());
        assert_eq!(state.status_text, STATUS_READY);
        assert!(!state.gate_unlocked);
        assert!(state.consent_banner_visible());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_with_transcript() {
        let state = UiState::with_transcript(vec![greeting()]);
        assert_eq!(state.messages.len(), 1);
        assert!(state.messages[0].is_bot());
    }

    #[test]
    fn test_ui_state_full_exchange_lifecycle() {
        let mut state = UiState::with_transcript(vec![greeting()]);

        state.process_events(vec![
            SiteEvent::ExchangeStarted { exchange_id: 1 },
            SiteEvent::UserMessage {
                message: ChatMessage::user("Hallo"),
            },
        ]);
        assert!(state.is_busy());
        assert_eq!(state.chat_status, ChatState::AwaitingResponse);
        assert_eq!(state.status_text, STATUS_WAITING);

        state.process_events(vec![SiteEvent::TypingStarted { exchange_id: 1 }]);
        assert_eq!(state.chat_status, ChatState::Typing);
        assert_eq!(state.status_text, STATUS_TYPING);

        state.process_events(vec![
            SiteEvent::BotMessage {
                message: ChatMessage::bot("Hallo! Wie kann ich helfen?"),
            },
            SiteEvent::QuotaUpdated {
                status: QuotaStatus::new(1, 5),
            },
            SiteEvent::ExchangeEnded { exchange_id: 1 },
        ]);

        assert!(!state.is_busy());
        assert_eq!(state.status_text, STATUS_READY);
        assert_eq!(state.messages.len(), 3);
        assert_eq!(state.remaining(), Some(4));
    }

    #[test]
    fn test_ui_state_failed_exchange_keeps_status() {
        let mut state = UiState::new();
        state.process_events(vec![
            SiteEvent::ExchangeStarted { exchange_id: 2 },
            SiteEvent::ExchangeFailed {
                exchange_id: 2,
                error: "HTTP 502".to_string(),
            },
            SiteEvent::BotMessage {
                message: ChatMessage::bot_error("Entschuldigung"),
            },
            SiteEvent::ExchangeEnded { exchange_id: 2 },
        ]);

        assert!(!state.is_busy());
        assert_eq!(state.status_text, STATUS_CHAT_FAILED);
        assert!(state.messages[0].is_error);
        // Raw upstream detail never reaches the transcript
        assert!(!state.messages[0].text.contains("502"));
    }

    #[test]
    fn test_ui_state_transcript_reset() {
        let mut state = UiState::with_transcript(vec![greeting()]);
        state.messages.push(ChatMessage::user("a"));
        state.messages.push(ChatMessage::bot("b"));
        state.speaking = true;
        state.chat_status = ChatState::Typing;

        state.process_events(vec![SiteEvent::TranscriptReset {
            greeting: greeting(),
        }]);

        assert_eq!(state.messages.len(), 1);
        assert!(!state.speaking);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_ignores_stale_exchange_end() {
        let mut state = UiState::with_transcript(vec![greeting()]);
        state.process_events(vec![
            SiteEvent::ExchangeStarted { exchange_id: 1 },
            SiteEvent::TranscriptReset {
                greeting: greeting(),
            },
            SiteEvent::ExchangeStarted { exchange_id: 2 },
        ]);
        assert!(state.is_busy());

        // Exchange 1 finishing late must not free the send button
        state.process_events(vec![
            SiteEvent::TypingStarted { exchange_id: 1 },
            SiteEvent::ExchangeFailed {
                exchange_id: 1,
                error: "HTTP 502".to_string(),
            },
            SiteEvent::ExchangeEnded { exchange_id: 1 },
        ]);
        assert!(state.is_busy());
        assert_eq!(state.chat_status, ChatState::AwaitingResponse);
        assert_eq!(state.active_exchange, Some(2));
        assert_eq!(state.status_text, STATUS_WAITING);

        state.input_text = "noch eine Frage".to_string();
        assert!(!state.can_submit());

        state.process_events(vec![SiteEvent::ExchangeEnded { exchange_id: 2 }]);
        assert!(!state.is_busy());
        assert!(state.active_exchange.is_none());
        assert!(state.can_submit());
    }

    #[test]
    fn test_ui_state_speech_events() {
        let mut state = UiState::new();
        state.process_events(vec![SiteEvent::SpeechStarted]);
        assert!(state.speaking);
        state.process_events(vec![SiteEvent::SpeechStopped]);
        assert!(!state.speaking);

        state.process_events(vec![
            SiteEvent::SpeechStarted,
            SiteEvent::SpeechFailed {
                error: "HTTP 401".to_string(),
            },
        ]);
        assert!(!state.speaking);
        assert_eq!(state.status_text, STATUS_SPEECH_FAILED);
    }

    #[test]
    fn test_ui_state_can_submit() {
        let mut state = UiState::new();
        assert!(!state.can_submit());

        state.input_text = "   ".to_string();
        assert!(!state.can_submit());

        state.input_text = "Frage".to_string();
        assert!(state.can_submit());

        state.chat_status = ChatState::AwaitingResponse;
        assert!(!state.can_submit());
        state.chat_status = ChatState::Idle;

        state.quota = Some(QuotaStatus::new(5, 5));
        assert!(state.quota_exhausted());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_ui_state_gate_events() {
        let mut state = UiState::new();
        state.gate_checking = true;
        state.password_input = "falsch".to_string();

        state.process_events(vec![SiteEvent::GateRejected {
            message: "Falsches Passwort.".to_string(),
        }]);
        assert!(!state.gate_unlocked);
        assert!(!state.gate_checking);
        assert_eq!(state.gate_error.as_deref(), Some("Falsches Passwort."));

        state.gate_checking = true;
        state.process_events(vec![SiteEvent::GateUnlocked]);
        assert!(state.gate_unlocked);
        assert!(state.gate_error.is_none());
        assert!(state.password_input.is_empty());
    }

    #[test]
    fn test_ui_state_consent_events() {
        let mut state = UiState::new();
        state.process_events(vec![SiteEvent::ConsentChanged {
            state: ConsentState::Accepted,
        }]);
        assert_eq!(state.consent, ConsentState::Accepted);
        assert!(!state.consent_banner_visible());
    }

    #[test]
    fn test_ui_state_process_error() {
        let mut state = UiState::new();
        state.process_events(vec![SiteEvent::Error {
            message: "Speicher nicht verfügbar".to_string(),
        }]);
        assert!(state.status_text.contains("Speicher nicht verfügbar"));
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_default() {
        let state = UiState::default();
        assert!(state.messages.is_empty());
        assert!(state.remaining().is_none());
    }
}
