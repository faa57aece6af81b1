//! JSON bodies returned by the `/api` endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::email::EmailMessage;
use crate::domain::lead::Lead;
use crate::integrations::anthropic::Usage;
use crate::models::config::AppMode;
use crate::services::assistant::{AssistantReply, AssistantStatus};
use crate::services::emails::Inbox;
use crate::services::health::DatabaseHealth;
use crate::services::leads::LeadsPage;
use crate::services::onboarding::DemoOnboarding;

/// Body of every failed API call.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeadsResponse {
    pub leads: Vec<Lead>,
    pub total: usize,
    pub page: usize,
}

impl From<LeadsPage> for LeadsResponse {
    fn from(page: LeadsPage) -> Self {
        Self {
            leads: page.leads,
            total: page.total,
            page: page.page,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub lead: Lead,
}

#[derive(Debug, Serialize)]
pub struct EmailsResponse {
    pub emails: Vec<EmailMessage>,
    pub total: usize,
    pub source: &'static str,
    pub connected: bool,
}

impl From<Inbox> for EmailsResponse {
    fn from(inbox: Inbox) -> Self {
        Self {
            total: inbox.total(),
            emails: inbox.emails,
            source: "mock",
            connected: inbox.connected,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OnboardingOrganization {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct OnboardingUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub success: bool,
    pub demo: bool,
    pub organization: OnboardingOrganization,
    pub user: OnboardingUser,
    pub redirect_to: &'static str,
}

impl From<DemoOnboarding> for OnboardingResponse {
    fn from(onboarding: DemoOnboarding) -> Self {
        Self {
            success: true,
            demo: true,
            organization: OnboardingOrganization {
                id: onboarding.organization.id.to_string(),
                name: onboarding.organization.name.into_inner(),
                slug: onboarding.organization.slug.into_inner(),
            },
            user: OnboardingUser {
                id: onboarding.user.id.to_string(),
                name: onboarding.user.name.into_inner(),
                email: onboarding.user.email.into_inner(),
                role: onboarding.user.role.to_string(),
            },
            redirect_to: onboarding.redirect_to,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealthResponse {
    pub status: &'static str,
    pub mode: AppMode,
    pub message: String,
    pub checked_at: DateTime<Utc>,
}

impl From<DatabaseHealth> for DatabaseHealthResponse {
    fn from(health: DatabaseHealth) -> Self {
        Self {
            status: health.status.as_str(),
            mode: health.mode,
            message: health.message,
            checked_at: health.checked_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub response: String,
    pub model: String,
    pub usage: Usage,
    pub demo: bool,
}

impl From<AssistantReply> for CompletionResponse {
    fn from(reply: AssistantReply) -> Self {
        Self {
            response: reply.response,
            model: reply.model,
            usage: reply.usage,
            demo: reply.demo,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssistantStatusResponse {
    pub configured: bool,
    pub model: String,
    pub mode: AppMode,
}

impl From<AssistantStatus> for AssistantStatusResponse {
    fn from(status: AssistantStatus) -> Self {
        Self {
            configured: status.configured,
            model: status.model,
            mode: status.mode,
        }
    }
}
