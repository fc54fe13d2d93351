//! `window.localStorage` backend.
//! Persistent per origin, string values only.

use async_trait::async_trait;
use web_sys::Storage;

use showcase_core::ports::StoragePort;
use showcase_types::{Result, SiteError};

const PROBE_KEY: &str = "showcase:probe";

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open localStorage and check that it accepts writes. Some private
    /// browsing modes expose the object but throw on `setItem`.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| SiteError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| SiteError::Storage("localStorage not available".to_string()))?;

        storage
            .set_item(PROBE_KEY, "1")
            .and_then(|_| storage.remove_item(PROBE_KEY))
            .map_err(|e| SiteError::Storage(format!("localStorage rejected write: {:?}", e)))?;

        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
