//! Payload for creating a lead through `POST /api/leads`.

use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::{LeadStatus, NewLead};
use crate::domain::types::{
    CompanyName, JobTitle, LeadEmail, LeadNotes, LeadScore, LeadSource, OrganizationId,
    PersonName, PhoneNumber, UserId,
};
use crate::forms::{FormError, non_blank, required};

#[derive(Debug, Default, Deserialize, Validate)]
/// JSON body accepted when creating a lead.
pub struct CreateLeadForm {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(length(max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 100))]
    pub source: Option<String>,
    pub status: Option<String>,
    pub score: Option<i32>,
    #[validate(length(max = 5000))]
    pub notes: Option<String>,
}

/// Validated lead data, not yet bound to an organization.
#[derive(Debug)]
pub struct CreateLeadPayload {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: LeadEmail,
    pub phone: Option<PhoneNumber>,
    pub company: Option<CompanyName>,
    pub title: Option<JobTitle>,
    pub source: Option<LeadSource>,
    pub status: LeadStatus,
    pub score: LeadScore,
    pub notes: Option<LeadNotes>,
}

impl TryFrom<CreateLeadForm> for CreateLeadPayload {
    type Error = FormError;

    fn try_from(form: CreateLeadForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let first_name = PersonName::new(required(&form.first_name, "first_name")?)
            .map_err(|_| FormError::InvalidName)?;
        let last_name = PersonName::new(required(&form.last_name, "last_name")?)
            .map_err(|_| FormError::InvalidName)?;
        let email = LeadEmail::new(required(&form.email, "email")?)
            .map_err(|_| FormError::InvalidEmail)?;

        let phone = non_blank(form.phone)
            .map(PhoneNumber::new)
            .transpose()
            .map_err(|_| FormError::InvalidPhoneNumber)?;
        let status = match non_blank(form.status) {
            Some(status) => status
                .parse::<LeadStatus>()
                .map_err(|_| FormError::InvalidStatus)?,
            None => LeadStatus::default(),
        };
        let score = form
            .score
            .map(LeadScore::new)
            .transpose()
            .map_err(|_| FormError::InvalidScore)?
            .unwrap_or_default();

        // Optional text that is blank or sanitizes to nothing is dropped.
        let company = non_blank(form.company).and_then(|v| CompanyName::new(v).ok());
        let title = non_blank(form.title).and_then(|v| JobTitle::new(v).ok());
        let source = non_blank(form.source).and_then(|v| LeadSource::new(v).ok());
        let notes = non_blank(form.notes).and_then(|v| LeadNotes::new(v).ok());

        Ok(Self {
            first_name,
            last_name,
            email,
            phone,
            company,
            title,
            source,
            status,
            score,
            notes,
        })
    }
}

impl CreateLeadPayload {
    pub fn into_domain(self, organization_id: OrganizationId, created_by: UserId) -> NewLead {
        NewLead {
            organization_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            title: self.title,
            source: self.source,
            status: self.status,
            score: self.score,
            notes: self.notes,
            created_by: Some(created_by),
        }
    }
}
