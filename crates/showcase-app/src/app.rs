//! Main egui application — composes the panels and drives the gate,
//! consent manager and chat orchestrator.

use std::rc::Rc;
use std::time::Duration;

use egui::{self, Align, CentralPanel, Layout, TopBottomPanel};

use showcase_core::consent::ConsentManager;
use showcase_core::event_bus::EventBus;
use showcase_core::gate::AccessGate;
use showcase_core::orchestrator::{ChatOrchestrator, ChatPorts};
use showcase_core::ports::{AudioClip, AudioPort, CookiePort};
use showcase_core::quota::QuotaTracker;
use showcase_platform::api::{ProxyChatClient, ProxyGateVerifier, ProxySpeechClient};
use showcase_platform::audio::HtmlAudioPlayer;
use showcase_platform::clock::LocalClock;
use showcase_platform::cookie::{DocumentCookies, MemoryCookieJar};
use showcase_platform::storage::auto_detect_storage;
use showcase_platform::timer::BrowserTimer;
use showcase_types::config::SiteConfig;
use showcase_types::event::SiteEvent;
use showcase_ui::panels::chat::{self, ChatAction};
use showcase_ui::panels::consent::{self, ConsentAction};
use showcase_ui::panels::gate;
use showcase_ui::state::UiState;
use showcase_ui::theme;

/// Element holding the page's JSON `SiteConfig`
const CONFIG_ELEMENT_ID: &str = "showcase_config";

/// The main application state
pub struct ShowcaseApp {
    ui_state: UiState,
    event_bus: EventBus,
    orchestrator: Rc<ChatOrchestrator>,
    gate: Rc<AccessGate>,
    consent: ConsentManager,
    first_frame: bool,
}

impl ShowcaseApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = load_site_config();
        let event_bus = EventBus::new();
        let storage = auto_detect_storage();

        let audio: Rc<dyn AudioPort> = match HtmlAudioPlayer::new() {
            Ok(player) => Rc::new(player),
            Err(e) => {
                log::warn!("Audio element unavailable: {}. Voice output muted.", e);
                Rc::new(MutedAudio)
            }
        };
        let ports = ChatPorts {
            chat: Rc::new(ProxyChatClient::new(&config.proxy)),
            speech: Rc::new(ProxySpeechClient::new(&config.proxy)),
            audio,
            timer: Rc::new(BrowserTimer),
        };
        let quota = QuotaTracker::new(storage.clone(), Rc::new(LocalClock), config.chat.daily_limit);
        let orchestrator = Rc::new(ChatOrchestrator::new(
            config.chat.clone(),
            event_bus.clone(),
            quota,
            ports,
        ));

        let gate = Rc::new(AccessGate::new(
            config.gate.clone(),
            storage,
            Rc::new(ProxyGateVerifier::new(&config.proxy)),
            event_bus.clone(),
        ));

        let cookies: Rc<dyn CookiePort> = match DocumentCookies::new() {
            Ok(cookies) => Rc::new(cookies),
            Err(e) => {
                log::warn!("document.cookie unavailable ({}), consent kept in memory", e);
                Rc::new(MemoryCookieJar::new())
            }
        };
        let consent = ConsentManager::new(cookies, event_bus.clone());

        let mut ui_state = UiState::with_transcript(orchestrator.transcript());
        ui_state.voice_enabled = orchestrator.voice_enabled();
        ui_state.consent = consent.current();

        Self::startup(gate.clone(), orchestrator.clone(), event_bus.clone());

        Self {
            ui_state,
            event_bus,
            orchestrator,
            gate,
            consent,
            first_frame: true,
        }
    }

    /// Apply the gate's load policy, then publish the quota (async)
    fn startup(gate: Rc<AccessGate>, orchestrator: Rc<ChatOrchestrator>, event_bus: EventBus) {
        wasm_bindgen_futures::spawn_local(async move {
            match gate.on_load().await {
                Ok(true) => event_bus.emit(SiteEvent::GateUnlocked),
                Ok(false) => {}
                Err(e) => {
                    log::error!("Access gate load failed: {}", e);
                    event_bus.emit(SiteEvent::Error {
                        message: e.to_string(),
                    });
                }
            }
            if let Err(e) = orchestrator.load().await {
                log::error!("Quota load failed: {}", e);
                event_bus.emit(SiteEvent::Error {
                    message: e.to_string(),
                });
            }
        });
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the orchestrator, gate and consent manager
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // Playback ends on its own, without an event.
        self.ui_state.speaking = self.orchestrator.is_speaking();

        if self.ui_state.is_busy() || self.ui_state.gate_checking {
            ctx.request_repaint();
        } else if self.ui_state.speaking {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        // ── Consent banner ───────────────────────────────────
        if self.ui_state.consent_banner_visible() {
            TopBottomPanel::bottom("consent_banner").show(ctx, |ui| {
                match consent::consent_banner(ui) {
                    ConsentAction::Accept => self.record_consent(true),
                    ConsentAction::Decline => self.record_consent(false),
                    ConsentAction::None => {}
                }
            });
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            if !self.ui_state.gate_unlocked {
                if let Some(password) = gate::gate_panel(ui, &mut self.ui_state) {
                    self.dispatch_unlock(password, ctx);
                }
                return;
            }

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                match chat::chat_panel(ui, &mut self.ui_state) {
                    ChatAction::Submit(text) => self.dispatch_message(text, ctx),
                    ChatAction::SetVoice(enabled) => self.dispatch_voice(enabled, ctx),
                    ChatAction::Reset => self.orchestrator.reset(),
                    ChatAction::None => {}
                }
            });
        });
    }
}

impl ShowcaseApp {
    /// Run one chat exchange (async)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let orchestrator = self.orchestrator.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match orchestrator.submit(&text).await {
                Ok(outcome) => log::debug!("Exchange finished: {:?}", outcome),
                Err(e) if e.is_validation() => log::debug!("Submit ignored: {}", e),
                Err(e) => {
                    log::error!("Chat exchange error: {}", e);
                    event_bus.emit(SiteEvent::Error {
                        message: e.to_string(),
                    });
                }
            }
            ctx.request_repaint();
        });
    }

    /// Switch voice output (async, may fetch speech)
    fn dispatch_voice(&self, enabled: bool, ctx: &egui::Context) {
        let orchestrator = self.orchestrator.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = orchestrator.set_voice_enabled(enabled).await {
                log::warn!("Voice toggle: {}", e);
            }
            ctx.request_repaint();
        });
    }

    /// Ask the proxy to check the password (async)
    fn dispatch_unlock(&self, password: String, ctx: &egui::Context) {
        let gate = self.gate.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            // Rejections already arrive as GateRejected events.
            if let Err(e) = gate.unlock(&password).await {
                log::debug!("Unlock rejected: {}", e);
            }
            ctx.request_repaint();
        });
    }

    fn record_consent(&self, accepted: bool) {
        let result = if accepted {
            self.consent.accept()
        } else {
            self.consent.decline()
        };
        if let Err(e) = result {
            log::warn!("Could not store cookie consent: {}", e);
        }
    }
}

/// Read `SiteConfig` from the page, falling back to defaults
fn load_site_config() -> SiteConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match json {
        Some(json) => match serde_json::from_str::<SiteConfig>(&json) {
            Ok(config) => {
                log::info!("Site config loaded from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("Invalid site config ({}), using defaults", e);
                SiteConfig::default()
            }
        },
        None => SiteConfig::default(),
    }
}

// ─── Muted audio for when no <audio> element can be created ──

struct MutedAudio;

impl AudioPort for MutedAudio {
    fn play(&self, _clip: AudioClip) -> showcase_types::Result<()> {
        Ok(())
    }

    fn stop(&self) {}

    fn is_playing(&self) -> bool {
        false
    }
}
