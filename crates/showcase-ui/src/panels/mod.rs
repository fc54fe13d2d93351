pub mod chat;
pub mod consent;
pub mod gate;
