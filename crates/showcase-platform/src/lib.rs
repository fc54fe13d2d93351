//! Browser adapters for the showcase-core ports.

pub mod api;
pub mod audio;
pub mod clock;
pub mod cookie;
pub mod fingerprint;
pub mod storage;
pub mod timer;
