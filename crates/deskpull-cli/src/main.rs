//! Deskpull CLI - Zendesk ticket and user extraction
//!
//! Pulls the incremental ticket feed and the cursor-paginated user listing
//! from Zendesk, deduplicates ticket versions, and writes both collections
//! as sorted-key JSON files. The invocation takes no flags or subcommands;
//! everything is configured through `ZENDESK_*` environment variables.

mod output;

use anyhow::Result;
use deskpull_core::{
    fetch_tickets, fetch_users, write_records, Credentials, ExportConfig, RetryPolicy,
    TicketFetchOptions, ZendeskClient,
};

use output::{print_error, print_info, print_success, print_summary, ExportRow};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let credentials = Credentials::from_env();
    let config = ExportConfig::from_env()?;

    let client = match &config.base_url {
        Some(base_url) => ZendeskClient::with_base_url(base_url, &credentials)?,
        None => ZendeskClient::new(&credentials)?,
    };

    let mut rows = Vec::new();

    print_info("Getting tickets from Zendesk...");
    let options = TicketFetchOptions {
        start_time: config.start_time,
        page_pause: config.page_pause,
        retry: RetryPolicy::default(),
    };
    // A ticket-fetch failure aborts the whole run before anything is written.
    let tickets = fetch_tickets(&client, &options).await?;
    let report = write_records(&tickets, &config.tickets_file)?;
    print_info(&format!("Ticket fields: {}", report.fields.join(", ")));
    print_success(&format!(
        "Ticket data saved to {} ({} records, {} fields)",
        report.destination.display(),
        report.record_count,
        report.fields.len()
    ));
    rows.push(ExportRow::new("tickets", &report));

    print_info("Getting users from Zendesk...");
    match fetch_users(&client, config.page_size).await {
        Ok(users) => {
            let report = write_records(&users, &config.users_file)?;
            print_info(&format!("User fields: {}", report.fields.join(", ")));
            print_success(&format!(
                "User data saved to {} ({} records, {} fields)",
                report.destination.display(),
                report.record_count,
                report.fields.len()
            ));
            rows.push(ExportRow::new("users", &report));
        }
        // The user export is best-effort: a first-page failure skips its
        // output without failing the run that already exported tickets.
        Err(err) => print_error(&format!("Failed to fetch users: {}", err)),
    }

    print_summary(&rows);
    Ok(())
}
