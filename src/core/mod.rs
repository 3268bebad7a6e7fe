//! Core domain models and business logic for the marketing site

#[cfg(feature = "ssr")]
pub mod api;
pub mod blog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod newsletter;
mod pricing;
pub mod state;
#[cfg(test)]
mod tests;

pub use pricing::*;
