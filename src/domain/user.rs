//! CRM users linked to identity-provider subjects.

use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ExternalUserId, OrganizationId, PersonName, UserEmail, UserId};

/// Role a user holds inside their organization.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Rep,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Manager => write!(f, "manager"),
            UserRole::Rep => write!(f, "rep"),
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            "admin" => UserRole::Admin,
            "manager" => UserRole::Manager,
            _ => UserRole::Rep,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub organization_id: OrganizationId,
    pub external_id: ExternalUserId,
    pub email: UserEmail,
    pub name: PersonName,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub organization_id: OrganizationId,
    pub external_id: ExternalUserId,
    pub email: UserEmail,
    pub name: PersonName,
    pub role: UserRole,
}

impl NewUser {
    #[must_use]
    pub fn new(
        organization_id: OrganizationId,
        external_id: ExternalUserId,
        email: UserEmail,
        name: PersonName,
        role: UserRole,
    ) -> Self {
        Self {
            organization_id,
            external_id,
            email,
            name,
            role,
        }
    }
}
