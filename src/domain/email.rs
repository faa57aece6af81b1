//! Messages surfaced by the mail integration.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EmailAddress {
    pub name: String,
    pub address: String,
}

/// A single message as listed in the integrations inbox.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EmailMessage {
    pub id: String,
    pub subject: String,
    pub from: EmailAddress,
    pub to: Vec<EmailAddress>,
    pub preview: String,
    pub received_at: DateTime<Utc>,
    pub is_read: bool,
    pub has_attachments: bool,
}
