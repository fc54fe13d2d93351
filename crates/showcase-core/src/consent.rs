//! Cookie consent banner logic.

use std::rc::Rc;

use showcase_types::{
    consent::{format_consent_cookie, parse_cookie, ConsentState, CONSENT_COOKIE_NAME},
    event::SiteEvent,
    Result,
};

use crate::event_bus::EventBus;
use crate::ports::CookiePort;

pub struct ConsentManager {
    cookies: Rc<dyn CookiePort>,
    event_bus: EventBus,
}

impl ConsentManager {
    pub fn new(cookies: Rc<dyn CookiePort>, event_bus: EventBus) -> Self {
        Self { cookies, event_bus }
    }

    /// Read the decision from the cookie jar. An unreadable jar counts as
    /// undecided.
    pub fn current(&self) -> ConsentState {
        match self.cookies.cookie_header() {
            Ok(header) => {
                ConsentState::from_cookie_value(parse_cookie(&header, CONSENT_COOKIE_NAME))
            }
            Err(e) => {
                log::warn!("Could not read cookies: {}", e);
                ConsentState::Unset
            }
        }
    }

    pub fn banner_visible(&self) -> bool {
        !self.current().is_decided()
    }

    pub fn accept(&self) -> Result<()> {
        self.decide(ConsentState::Accepted)
    }

    pub fn decline(&self) -> Result<()> {
        self.decide(ConsentState::Declined)
    }

    fn decide(&self, state: ConsentState) -> Result<()> {
        if let Some(assignment) = format_consent_cookie(state) {
            self.cookies.write(&assignment)?;
        }
        log::info!("Cookie consent: {:?}", state);
        self.event_bus.emit(SiteEvent::ConsentChanged { state });
        Ok(())
    }
}
