pub mod message;
pub mod event;
pub mod config;
pub mod consent;
pub mod quota;
pub mod error;


pub use error::SiteError;
pub type Result<T> = std::result::Result<T, SiteError>;
