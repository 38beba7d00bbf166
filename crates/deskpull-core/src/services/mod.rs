//! Extraction services
//!
//! The two pagination pipelines and the JSON sink.

pub mod export;
pub mod tickets;
pub mod users;
