//! Sales leads tracked per organization.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CompanyName, JobTitle, LeadEmail, LeadId, LeadNotes, LeadScore, LeadSource, OrganizationId,
    PersonName, PhoneNumber, TypeConstraintError, UserId,
};

/// Qualification stage of a lead.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Unqualified,
    Converted,
}

impl LeadStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Unqualified => "unqualified",
            LeadStatus::Converted => "converted",
        }
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "qualified" => Ok(LeadStatus::Qualified),
            "unqualified" => Ok(LeadStatus::Unqualified),
            "converted" => Ok(LeadStatus::Converted),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown lead status `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: LeadId,
    pub organization_id: OrganizationId,
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
    pub created_by: Option<UserId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewLead {
    pub organization_id: OrganizationId,
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
    pub created_by: Option<UserId>,
}

impl NewLead {
    /// Starts a lead with only the required fields set.
    #[must_use]
    pub fn new(
        organization_id: OrganizationId,
        first_name: PersonName,
        last_name: PersonName,
        email: LeadEmail,
    ) -> Self {
        Self {
            organization_id,
            first_name,
            last_name,
            email,
            phone: None,
            company: None,
            title: None,
            source: None,
            status: LeadStatus::default(),
            score: LeadScore::default(),
            notes: None,
            created_by: None,
        }
    }

    #[must_use]
    pub fn company(mut self, company: CompanyName) -> Self {
        self.company = Some(company);
        self
    }

    #[must_use]
    pub fn status(mut self, status: LeadStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn score(mut self, score: LeadScore) -> Self {
        self.score = score;
        self
    }

    #[must_use]
    pub fn created_by(mut self, user_id: UserId) -> Self {
        self.created_by = Some(user_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Qualified".parse::<LeadStatus>(), Ok(LeadStatus::Qualified));
        assert_eq!(" new ".parse::<LeadStatus>(), Ok(LeadStatus::New));
        assert!("won".parse::<LeadStatus>().is_err());
    }
}
