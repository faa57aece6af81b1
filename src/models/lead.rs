//! Diesel models for sales leads.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lead::{Lead as DomainLead, LeadStatus, NewLead as DomainNewLead};
use crate::domain::types::{
    CompanyName, JobTitle, LeadEmail, LeadId, LeadNotes, LeadScore, LeadSource, OrganizationId,
    PersonName, PhoneNumber, TypeConstraintError, UserId,
};
use crate::models::organization::Organization;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Organization, foreign_key = organization_id))]
#[diesel(table_name = crate::schema::leads)]
/// Diesel model for [`crate::domain::lead::Lead`].
pub struct Lead {
    pub id: i32,
    pub organization_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub source: Option<String>,
    pub status: String,
    pub score: i32,
    pub notes: Option<String>,
    pub created_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leads)]
/// Insertable form of [`Lead`].
pub struct NewLead<'a> {
    pub organization_id: i32,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub company: Option<&'a str>,
    pub title: Option<&'a str>,
    pub source: Option<&'a str>,
    pub status: &'static str,
    pub score: i32,
    pub notes: Option<&'a str>,
    pub created_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Maps an optional column through a constrained constructor.
fn optional<T>(
    value: Option<String>,
    ctor: impl FnOnce(String) -> Result<T, TypeConstraintError>,
) -> Result<Option<T>, TypeConstraintError> {
    value.map(ctor).transpose()
}

impl TryFrom<Lead> for DomainLead {
    type Error = TypeConstraintError;

    fn try_from(lead: Lead) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LeadId::new(lead.id)?,
            organization_id: OrganizationId::new(lead.organization_id)?,
            first_name: PersonName::new(lead.first_name)?,
            last_name: PersonName::new(lead.last_name)?,
            email: LeadEmail::new(lead.email)?,
            phone: optional(lead.phone, PhoneNumber::new)?,
            company: optional(lead.company, CompanyName::new)?,
            title: optional(lead.title, JobTitle::new)?,
            source: optional(lead.source, LeadSource::new)?,
            status: lead.status.parse::<LeadStatus>()?,
            score: LeadScore::new(lead.score)?,
            notes: optional(lead.notes, LeadNotes::new)?,
            created_by: lead.created_by.map(UserId::new).transpose()?,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewLead> for NewLead<'a> {
    fn from(lead: &'a DomainNewLead) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            organization_id: lead.organization_id.get(),
            first_name: lead.first_name.as_str(),
            last_name: lead.last_name.as_str(),
            email: lead.email.as_str(),
            phone: lead.phone.as_ref().map(PhoneNumber::as_str),
            company: lead.company.as_ref().map(|c| c.as_str()),
            title: lead.title.as_ref().map(|t| t.as_str()),
            source: lead.source.as_ref().map(|s| s.as_str()),
            status: lead.status.as_str(),
            score: lead.score.get(),
            notes: lead.notes.as_ref().map(LeadNotes::as_str),
            created_by: lead.created_by.map(UserId::get),
            created_at: now,
            updated_at: now,
        }
    }
}
