//! egui panels for the Showcase site.

pub mod panels;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
