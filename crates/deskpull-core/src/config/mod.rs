//! Run configuration
//!
//! Everything the extraction run needs is environment-driven: credentials,
//! the historical start time for the incremental ticket feed, the user page
//! size, and the output locations. Nothing is validated upfront beyond basic
//! parsing; bad credentials surface as an authentication failure on the
//! first request.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Default historical start time for the incremental ticket feed
/// (2019-01-01T00:00:00Z as a UNIX timestamp).
pub const DEFAULT_START_TIME: i64 = 1_546_300_800;

/// Default `page[size]` for the user listing endpoint.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Output filename for the ticket export.
pub const TICKETS_FILE: &str = "Zendesk_Tickets.json";

/// Output filename for the user export.
pub const USERS_FILE: &str = "Zendesk_Users.json";

/// Zendesk API credentials.
///
/// Loaded from `ZENDESK_SUBDOMAIN`, `ZENDESK_EMAIL` and `ZENDESK_API_TOKEN`.
/// Missing variables load as empty strings so the failure shows up as a 401
/// from the API rather than an upfront check.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub subdomain: String,
    pub email: String,
    pub api_token: String,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            subdomain: env::var("ZENDESK_SUBDOMAIN").unwrap_or_default(),
            email: env::var("ZENDESK_EMAIL").unwrap_or_default(),
            api_token: env::var("ZENDESK_API_TOKEN").unwrap_or_default(),
        }
    }
}

/// Configuration for one extraction run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// UNIX timestamp the incremental ticket feed starts from.
    pub start_time: i64,
    /// `page[size]` for the user listing endpoint.
    pub page_size: usize,
    /// Courtesy pause between successful ticket pages.
    pub page_pause: Duration,
    /// Destination for the ticket export.
    pub tickets_file: PathBuf,
    /// Destination for the user export.
    pub users_file: PathBuf,
    /// Optional API host override (`ZENDESK_BASE_URL`); when unset the host
    /// is derived from the subdomain.
    pub base_url: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            start_time: DEFAULT_START_TIME,
            page_size: DEFAULT_PAGE_SIZE,
            page_pause: Duration::from_secs(1),
            tickets_file: PathBuf::from(TICKETS_FILE),
            users_file: PathBuf::from(USERS_FILE),
            base_url: None,
        }
    }
}

impl ExportConfig {
    /// Build the run configuration from environment variables, falling back
    /// to the defaults above for anything unset.
    pub fn from_env() -> Result<Self> {
        let start_time = parse_env("ZENDESK_START_TIME", DEFAULT_START_TIME)?;
        let page_size = parse_env("ZENDESK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;

        let output_dir = env::var("ZENDESK_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string());
        let output_dir = PathBuf::from(shellexpand::tilde(&output_dir).into_owned());

        Ok(Self {
            start_time,
            page_size,
            tickets_file: output_dir.join(TICKETS_FILE),
            users_file: output_dir.join(USERS_FILE),
            base_url: env::var("ZENDESK_BASE_URL").ok(),
            ..Self::default()
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("invalid {}: {}", key, value))),
        Err(_) => Ok(default),
    }
}
