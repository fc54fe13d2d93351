//! Queue between the core services and the egui frame loop.
//!
//! The orchestrator, gate and consent manager push `SiteEvent`s as they
//! happen; `ShowcaseApp::update` takes the whole backlog once per frame.
//! Everything runs on the browser's single thread, so an `Rc<RefCell<_>>`
//! is enough.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use showcase_types::event::SiteEvent;

/// Handle to one shared queue; clones push into and drain the same one.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<SiteEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: SiteEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<SiteEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Something arrived since the last frame (repaint hint)
    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}
