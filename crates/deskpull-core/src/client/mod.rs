//! Zendesk REST API client
//!
//! A thin wrapper around `reqwest` that carries the API-token authentication
//! and knows how to address the two endpoints the extractors consume: the
//! incremental ticket export and the cursor-paginated user listing. The
//! extractors get the raw response back so they can inspect the status code
//! and the throttling headers themselves.

pub mod throttle;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{header, Client, Response};

use crate::config::Credentials;
use crate::error::{Error, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Zendesk REST API client
pub struct ZendeskClient {
    base_url: String,
    client: Client,
}

impl ZendeskClient {
    /// Create a client for the account's standard host
    /// (`https://{subdomain}.zendesk.com`).
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let base_url = format!("https://{}.zendesk.com", credentials.subdomain);
        Self::with_base_url(&base_url, credentials)
    }

    /// Create a client against an explicit API host.
    pub fn with_base_url(base_url: &str, credentials: &Credentials) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&basic_auth(&credentials.email, &credentials.api_token))
                .map_err(|_| Error::config("credentials contain invalid header characters"))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { base_url, client })
    }

    /// First-page URL for the incremental ticket export. Later pages come
    /// back as absolute `next_page` URLs and are fetched verbatim.
    pub fn incremental_tickets_url(&self, start_time: i64) -> String {
        format!(
            "{}/api/v2/incremental/tickets.json?start_time={}&include=metric_sets",
            self.base_url, start_time
        )
    }

    /// Issue an authenticated GET against an absolute URL.
    pub async fn get(&self, url: &str) -> Result<Response> {
        Ok(self.client.get(url).send().await?)
    }

    /// Fetch one page of the user listing. The `page[after]` cursor is
    /// omitted on the first call.
    pub async fn get_users_page(
        &self,
        page_size: usize,
        after_cursor: Option<&str>,
    ) -> Result<Response> {
        let url = format!("{}/api/v2/users.json", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .query(&[("page[size]", page_size.to_string())]);
        if let Some(cursor) = after_cursor {
            request = request.query(&[("page[after]", cursor)]);
        }
        Ok(request.send().await?)
    }
}

/// Zendesk API-token authentication: Basic auth with `{email}/token` as the
/// username and the token as the password.
fn basic_auth(email: &str, api_token: &str) -> String {
    let identity = format!("{}/token:{}", email, api_token);
    format!("Basic {}", BASE64.encode(identity.as_bytes()))
}
