//! Daily request quota for the demo chat.
//!
//! The count and the date it belongs to are stored under two separate
//! keys. Every read first compares the stored date with today; a mismatch
//! resets the count to zero and restamps the date.

use std::rc::Rc;

use showcase_types::{quota::QuotaStatus, Result};

use crate::ports::{ClockPort, StoragePort};

pub const COUNT_KEY: &str = "showcase:chat_request_count";
pub const DATE_KEY: &str = "showcase:chat_request_date";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct QuotaTracker {
    storage: Rc<dyn StoragePort>,
    clock: Rc<dyn ClockPort>,
    limit: u32,
}

impl QuotaTracker {
    pub fn new(storage: Rc<dyn StoragePort>, clock: Rc<dyn ClockPort>, limit: u32) -> Self {
        Self {
            storage,
            clock,
            limit,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Current status after applying the day rollover.
    pub async fn status(&self) -> Result<QuotaStatus> {
        let used = self.load_count().await?;
        Ok(QuotaStatus::new(used, self.limit))
    }

    /// Count one completed exchange.
    pub async fn record_exchange(&self) -> Result<QuotaStatus> {
        let used = self.load_count().await?.saturating_add(1);
        self.storage.set(COUNT_KEY, &used.to_string()).await?;
        log::debug!("Demo chat quota: {}/{}", used, self.limit);
        Ok(QuotaStatus::new(used, self.limit))
    }

    async fn load_count(&self) -> Result<u32> {
        let today = self.clock.today().format(DATE_FORMAT).to_string();
        let stored_date = self.storage.get(DATE_KEY).await?;

        if stored_date.as_deref() != Some(today.as_str()) {
            self.storage.set(COUNT_KEY, "0").await?;
            self.storage.set(DATE_KEY, &today).await?;
            log::info!("Demo chat quota reset for {}", today);
            return Ok(0);
        }

        let count = self
            .storage
            .get(COUNT_KEY)
            .await?
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(0);
        Ok(count)
    }
}
