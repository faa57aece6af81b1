//! Diesel models for CRM users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{
    ExternalUserId, OrganizationId, PersonName, TypeConstraintError, UserEmail, UserId,
};
use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser, UserRole};
use crate::models::organization::Organization;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Organization, foreign_key = organization_id))]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`].
pub struct User {
    pub id: i32,
    pub organization_id: i32,
    pub external_id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser<'a> {
    pub organization_id: i32,
    pub external_id: &'a str,
    pub email: &'a str,
    pub name: &'a str,
    pub role: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(user.id)?,
            organization_id: OrganizationId::new(user.organization_id)?,
            external_id: ExternalUserId::new(user.external_id)?,
            email: UserEmail::new(user.email)?,
            name: PersonName::new(user.name)?,
            role: UserRole::from(user.role.as_str()),
            created_at: user.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(user: &'a DomainNewUser) -> Self {
        Self {
            organization_id: user.organization_id.get(),
            external_id: user.external_id.as_str(),
            email: user.email.as_str(),
            name: user.name.as_str(),
            role: user.role.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
