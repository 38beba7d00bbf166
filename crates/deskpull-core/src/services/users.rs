//! User listing export
//!
//! Walks the cursor-paginated user listing with a fixed page size. The
//! vendor's cursor pagination guarantees no overlap between pages, so
//! records are appended without dedup. A throttled page is retried exactly
//! once after the server-directed wait. Failure on the first page aborts the
//! export; failure on a later page stops it and keeps what was fetched -
//! unlike the ticket feed, a mid-stream pagination failure here is
//! best-effort complete rather than fatal.

use log::{debug, info, warn};
use serde_json::Value;
use tokio::time::sleep;

use crate::client::throttle::throttle_delay;
use crate::client::ZendeskClient;
use crate::error::{Error, Result};
use crate::models::UserPage;

/// Fetch the full user listing in page order.
pub async fn fetch_users(client: &ZendeskClient, page_size: usize) -> Result<Vec<Value>> {
    let mut users: Vec<Value> = Vec::new();
    let mut cursor: Option<String> = None;
    let mut first_page = true;

    loop {
        let mut response = client.get_users_page(page_size, cursor.as_deref()).await?;

        if let Some(wait) = throttle_delay(response.status(), response.headers()) {
            warn!("rate limited fetching users, waiting {:?}", wait);
            sleep(wait).await;
            response = client.get_users_page(page_size, cursor.as_deref()).await?;
        }

        let status = response.status();
        if !status.is_success() {
            if first_page {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::Api { status, body });
            }
            warn!(
                "user listing returned {} mid-pagination, keeping the {} users fetched so far",
                status,
                users.len()
            );
            break;
        }

        let page: UserPage = response.json().await?;
        debug!(
            "user page: {} records, has_more={}",
            page.users.len(),
            page.meta.has_more
        );
        users.extend(page.users);

        if !page.meta.has_more {
            break;
        }
        cursor = Some(page.meta.after_cursor.ok_or_else(|| {
            Error::payload("user listing has more pages but `after_cursor` is missing")
        })?);
        first_page = false;
    }

    info!("fetched {} users", users.len());
    Ok(users)
}
