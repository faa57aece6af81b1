//! Mail-integration inbox. Messages are generated locally until a real
//! mailbox sync exists.

use chrono::{Duration, Utc};

use crate::domain::auth::AuthenticatedUser;
use crate::domain::email::{EmailAddress, EmailMessage};
use crate::services::ServiceError;

pub const DEFAULT_EMAIL_LIMIT: usize = 10;
pub const MAX_EMAIL_LIMIT: usize = 50;

#[derive(Debug, Default)]
pub struct EmailsQuery {
    pub limit: Option<usize>,
    pub unread_only: bool,
}

#[derive(Debug)]
pub struct Inbox {
    pub emails: Vec<EmailMessage>,
    pub connected: bool,
}

impl Inbox {
    pub fn total(&self) -> usize {
        self.emails.len()
    }
}

struct SampleMessage {
    subject: &'static str,
    from_name: &'static str,
    from_address: &'static str,
    preview: &'static str,
    age_hours: i64,
    is_read: bool,
    has_attachments: bool,
}

const SAMPLE_MESSAGES: &[SampleMessage] = &[
    SampleMessage {
        subject: "Re: Pricing for the Q3 rollout",
        from_name: "Sarah Chen",
        from_address: "sarah.chen@northwindtraders.com",
        preview: "Thanks for the revised quote. Can we walk through the seat tiers on Thursday?",
        age_hours: 1,
        is_read: false,
        has_attachments: false,
    },
    SampleMessage {
        subject: "Security questionnaire",
        from_name: "Marcus Webb",
        from_address: "m.webb@fabrikam.io",
        preview: "Attached is our vendor security questionnaire, our champion needs it before the review.",
        age_hours: 5,
        is_read: false,
        has_attachments: true,
    },
    SampleMessage {
        subject: "Intro from the Tailspin event",
        from_name: "Priya Natarajan",
        from_address: "priya@tailspintoys.com",
        preview: "Great meeting you at the booth. Our team is looking at pipeline tooling this quarter.",
        age_hours: 26,
        is_read: true,
        has_attachments: false,
    },
    SampleMessage {
        subject: "Pilot kickoff notes",
        from_name: "Diego Alvarez",
        from_address: "diego.alvarez@wingtipsolutions.com",
        preview: "Sharing the notes from kickoff along with the success criteria we agreed on.",
        age_hours: 50,
        is_read: true,
        has_attachments: true,
    },
    SampleMessage {
        subject: "Budget timing",
        from_name: "Hannah Olsen",
        from_address: "hannah.olsen@litware.net",
        preview: "We won't have budget until the next fiscal year, happy to reconnect then.",
        age_hours: 120,
        is_read: true,
        has_attachments: false,
    },
];

/// Returns the caller's inbox, newest first.
pub fn list_emails(user: &AuthenticatedUser, connected: bool, params: EmailsQuery) -> Inbox {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_EMAIL_LIMIT)
        .clamp(1, MAX_EMAIL_LIMIT);
    let now = Utc::now();
    let recipient = EmailAddress {
        name: user.name.clone(),
        address: user.email.clone(),
    };

    let emails = SAMPLE_MESSAGES
        .iter()
        .enumerate()
        .filter(|(_, sample)| !params.unread_only || !sample.is_read)
        .take(limit)
        .map(|(index, sample)| EmailMessage {
            id: format!("msg-{:03}", index + 1),
            subject: sample.subject.to_string(),
            from: EmailAddress {
                name: sample.from_name.to_string(),
                address: sample.from_address.to_string(),
            },
            to: vec![recipient.clone()],
            preview: sample.preview.to_string(),
            received_at: now - Duration::hours(sample.age_hours),
            is_read: sample.is_read,
            has_attachments: sample.has_attachments,
        })
        .collect();

    Inbox { emails, connected }
}

/// Mailbox sync is not available yet; every request is refused.
pub fn sync_emails(_user: &AuthenticatedUser) -> ServiceError {
    ServiceError::NotImplemented("Email sync is not implemented".to_string())
}
