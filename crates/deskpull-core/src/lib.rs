//! # deskpull-core
//!
//! Core extraction logic for deskpull - shared between the CLI and tests.
//!
//! This crate provides:
//! - Environment-driven configuration (`config` module)
//! - The authenticated Zendesk HTTP client and rate-limit handling (`client` module)
//! - Wire-format models for the vendor endpoints (`models` module)
//! - The extraction pipelines and the JSON sink (`services` module)
//! - Unified error handling (`error` module)

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-exports for convenience
pub use client::throttle::RetryPolicy;
pub use client::ZendeskClient;
pub use config::{Credentials, ExportConfig};
pub use error::{Error, Result};
pub use models::{CursorMeta, RecordIdentity, TicketPage, UserPage};
pub use services::export::{write_records, ExportReport};
pub use services::tickets::{fetch_tickets, TicketFetchOptions};
pub use services::users::fetch_users;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
