use serde::{Deserialize, Serialize};

/// Snapshot of the daily demo-chat quota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaStatus {
    /// Exchanges recorded today
    pub used: u32,
    /// Configured daily maximum
    pub limit: u32,
}

impl QuotaStatus {
    pub fn new(used: u32, limit: u32) -> Self {
        Self { used, limit }
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
