//! Organizations own users and leads; every query is scoped to one.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{OrganizationId, OrganizationName, OrganizationSlug};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: OrganizationName,
    pub slug: OrganizationSlug,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewOrganization {
    pub name: OrganizationName,
    pub slug: OrganizationSlug,
}

impl NewOrganization {
    #[must_use]
    pub fn new(name: OrganizationName, slug: OrganizationSlug) -> Self {
        Self { name, slug }
    }
}
