//! Wire-format models for the Zendesk endpoints
//!
//! Records themselves stay opaque `serde_json::Value`s - the vendor owns the
//! schema and the export reproduces it verbatim. Only the pagination
//! envelopes and the ticket identity are typed.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// One page of the incremental ticket export.
#[derive(Debug, Deserialize)]
pub struct TicketPage {
    pub tickets: Vec<Value>,
    pub end_of_stream: bool,
    pub next_page: Option<String>,
}

/// One page of the cursor-paginated user listing.
#[derive(Debug, Deserialize)]
pub struct UserPage {
    pub users: Vec<Value>,
    pub meta: CursorMeta,
}

/// Cursor metadata on a user listing page.
#[derive(Debug, Deserialize)]
pub struct CursorMeta {
    pub has_more: bool,
    pub after_cursor: Option<String>,
}

/// Identity of one ticket version.
///
/// The incremental feed may re-emit a ticket on adjacent pages when it
/// changes mid-extraction. Keying on `(id, updated_at)` drops true
/// duplicates while keeping every distinct version of the same ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordIdentity {
    pub id: i64,
    pub updated_at: String,
}

impl RecordIdentity {
    /// Extract the identity from a raw ticket record.
    pub fn of(record: &Value) -> Result<Self> {
        let id = record
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| Error::payload("ticket record missing numeric `id`"))?;
        let updated_at = record
            .get("updated_at")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::payload("ticket record missing `updated_at`"))?
            .to_string();
        Ok(Self { id, updated_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_ticket_page_deserialization() {
        let page: TicketPage = serde_json::from_value(json!({
            "tickets": [{"id": 1, "updated_at": "2024-03-01T10:00:00Z"}],
            "end_of_stream": false,
            "next_page": "https://example.zendesk.com/api/v2/incremental/tickets.json?start_time=99"
        }))
        .unwrap();
        assert_eq!(page.tickets.len(), 1);
        assert!(!page.end_of_stream);
        assert!(page.next_page.is_some());
    }

    #[test]
    fn test_ticket_page_final_page() {
        let page: TicketPage = serde_json::from_value(json!({
            "tickets": [],
            "end_of_stream": true,
            "next_page": null
        }))
        .unwrap();
        assert!(page.end_of_stream);
        assert!(page.next_page.is_none());
    }

    #[test]
    fn test_user_page_deserialization() {
        let page: UserPage = serde_json::from_value(json!({
            "users": [{"id": 7, "name": "Agent"}],
            "meta": {"has_more": true, "after_cursor": "c1"}
        }))
        .unwrap();
        assert_eq!(page.users.len(), 1);
        assert!(page.meta.has_more);
        assert_eq!(page.meta.after_cursor.as_deref(), Some("c1"));
    }

    #[test]
    fn test_record_identity_extraction() {
        let identity =
            RecordIdentity::of(&json!({"id": 12, "updated_at": "t1", "subject": "hi"})).unwrap();
        assert_eq!(identity.id, 12);
        assert_eq!(identity.updated_at, "t1");
    }

    #[test]
    fn test_record_identity_missing_id() {
        let err = RecordIdentity::of(&json!({"updated_at": "t1"})).unwrap_err();
        assert!(err.to_string().contains("`id`"));
    }

    #[test]
    fn test_record_identity_missing_updated_at() {
        let err = RecordIdentity::of(&json!({"id": 12})).unwrap_err();
        assert!(err.to_string().contains("`updated_at`"));
    }

    #[test]
    fn test_record_identity_distinguishes_versions() {
        let mut seen = HashSet::new();
        let v1 = RecordIdentity::of(&json!({"id": 1, "updated_at": "t1"})).unwrap();
        let v1_again = RecordIdentity::of(&json!({"id": 1, "updated_at": "t1"})).unwrap();
        let v2 = RecordIdentity::of(&json!({"id": 1, "updated_at": "t2"})).unwrap();

        assert!(seen.insert(v1));
        assert!(!seen.insert(v1_again), "same version is a duplicate");
        assert!(seen.insert(v2), "newer version is a distinct entry");
    }
}
