//! Diesel models for organizations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::organization::{
    NewOrganization as DomainNewOrganization, Organization as DomainOrganization,
};
use crate::domain::types::{
    OrganizationId, OrganizationName, OrganizationSlug, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::organizations)]
/// Diesel model for [`crate::domain::organization::Organization`].
pub struct Organization {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::organizations)]
/// Insertable form of [`Organization`].
pub struct NewOrganization<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Organization> for DomainOrganization {
    type Error = TypeConstraintError;

    fn try_from(organization: Organization) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OrganizationId::new(organization.id)?,
            name: OrganizationName::new(organization.name)?,
            slug: OrganizationSlug::new(organization.slug)?,
            created_at: organization.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewOrganization> for NewOrganization<'a> {
    fn from(organization: &'a DomainNewOrganization) -> Self {
        Self {
            name: organization.name.as_str(),
            slug: organization.slug.as_str(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
