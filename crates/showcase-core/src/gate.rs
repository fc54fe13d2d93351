//! Access gate in front of the whole site.
//!
//! The password itself never reaches the browser: a `GateVerifierPort`
//! asks the proxy to compare it. Only the resulting unlock flag is
//! stored client-side.

use std::rc::Rc;

use showcase_types::{config::GateConfig, event::SiteEvent, Result, SiteError};

use crate::event_bus::EventBus;
use crate::ports::{GateVerifierPort, StoragePort};

pub const AUTH_FLAG_KEY: &str = "showcase:authenticated";

const WRONG_PASSWORD_MESSAGE: &str = "Falsches Passwort. Bitte versuche es erneut.";
const EMPTY_PASSWORD_MESSAGE: &str = "Bitte gib ein Passwort ein.";
const GATE_UNAVAILABLE_MESSAGE: &str =
    "Die Anmeldung ist gerade nicht erreichbar. Bitte versuche es später erneut.";

pub struct AccessGate {
    config: GateConfig,
    storage: Rc<dyn StoragePort>,
    verifier: Rc<dyn GateVerifierPort>,
    event_bus: EventBus,
}

impl AccessGate {
    pub fn new(
        config: GateConfig,
        storage: Rc<dyn StoragePort>,
        verifier: Rc<dyn GateVerifierPort>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            config,
            storage,
            verifier,
            event_bus,
        }
    }

    /// Called once per page load. Without `remember_unlock` the stored
    /// flag is dropped so every visit asks for the password again.
    pub async fn on_load(&self) -> Result<bool> {
        if !self.config.remember_unlock {
            self.storage.delete(AUTH_FLAG_KEY).await?;
            return Ok(false);
        }
        self.is_unlocked().await
    }

    pub async fn is_unlocked(&self) -> Result<bool> {
        Ok(self.storage.get(AUTH_FLAG_KEY).await?.as_deref() == Some("true"))
    }

    /// Check `input` against the site password. The input is passed on
    /// verbatim, no trimming.
    pub async fn unlock(&self, input: &str) -> Result<()> {
        if input.is_empty() {
            self.reject(EMPTY_PASSWORD_MESSAGE);
            return Err(SiteError::EmptyInput);
        }

        match self.verifier.verify(input).await {
            Ok(true) => {
                // The password was right; a failed write only loses persistence.
                if let Err(e) = self.storage.set(AUTH_FLAG_KEY, "true").await {
                    log::warn!("Could not store unlock flag: {}", e);
                }
                log::info!("Access gate unlocked");
                self.event_bus.emit(SiteEvent::GateUnlocked);
                Ok(())
            }
            Ok(false) => {
                self.reject(WRONG_PASSWORD_MESSAGE);
                Err(SiteError::AccessDenied)
            }
            Err(e) => {
                log::error!("Access gate check failed: {}", e);
                self.reject(GATE_UNAVAILABLE_MESSAGE);
                Err(e)
            }
        }
    }

    pub async fn lock(&self) -> Result<()> {
        self.storage.delete(AUTH_FLAG_KEY).await
    }

    fn reject(&self, message: &str) {
        self.event_bus.emit(SiteEvent::GateRejected {
            message: message.to_string(),
        });
    }
}
