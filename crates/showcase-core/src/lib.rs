//! Showcase core — chat orchestration, quota, access gate and consent,
//! written against port traits so it runs unchanged in the browser and
//! in native tests.

pub mod ports;
pub mod event_bus;
pub mod quota;
pub mod orchestrator;
pub mod gate;
pub mod consent;
pub mod security;
