//! Canned, non-persistent data served while the application runs in demo mode.

use chrono::{Duration, NaiveDateTime, Utc};

use crate::domain::auth::DEMO_SUBJECT;
use crate::domain::lead::{Lead, LeadStatus, NewLead};
use crate::domain::types::{
    CompanyName, ExternalUserId, JobTitle, LeadEmail, LeadId, LeadNotes, LeadScore, LeadSource,
    OrganizationId, PersonName, PhoneNumber, TypeConstraintError, UserEmail, UserId,
};
use crate::domain::user::{User, UserRole};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DatabaseProbe, LeadListQuery, LeadReader, LeadWriter, UserReader};

pub const DEMO_ORGANIZATION_ID: i32 = 1;
pub const DEMO_USER_ID: i32 = 1;

struct DemoLead {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: Option<&'static str>,
    company: &'static str,
    title: &'static str,
    source: &'static str,
    status: LeadStatus,
    score: i32,
    notes: Option<&'static str>,
    age_days: i64,
}

const DEMO_LEADS: &[DemoLead] = &[
    DemoLead {
        first_name: "Sarah",
        last_name: "Chen",
        email: "sarah.chen@northwindtraders.com",
        phone: Some("+14155550132"),
        company: "Northwind Traders",
        title: "VP of Operations",
        source: "website",
        status: LeadStatus::Qualified,
        score: 86,
        notes: Some("Evaluating three vendors, decision expected this quarter."),
        age_days: 2,
    },
    DemoLead {
        first_name: "Marcus",
        last_name: "Webb",
        email: "m.webb@fabrikam.io",
        phone: Some("+12125550187"),
        company: "Fabrikam",
        title: "Head of Sales",
        source: "referral",
        status: LeadStatus::Contacted,
        score: 64,
        notes: Some("Intro call done, wants a MEDDPICC-style qualification review."),
        age_days: 5,
    },
    DemoLead {
        first_name: "Priya",
        last_name: "Natarajan",
        email: "priya@tailspintoys.com",
        phone: None,
        company: "Tailspin Toys",
        title: "Chief Revenue Officer",
        source: "event",
        status: LeadStatus::New,
        score: 40,
        notes: None,
        age_days: 7,
    },
    DemoLead {
        first_name: "Diego",
        last_name: "Alvarez",
        email: "diego.alvarez@wingtipsolutions.com",
        phone: Some("+13055550111"),
        company: "Wingtip Solutions",
        title: "Procurement Manager",
        source: "outbound",
        status: LeadStatus::Converted,
        score: 95,
        notes: Some("Signed pilot, handed over to customer success."),
        age_days: 21,
    },
    DemoLead {
        first_name: "Hannah",
        last_name: "Olsen",
        email: "hannah.olsen@litware.net",
        phone: None,
        company: "Litware",
        title: "Operations Analyst",
        source: "website",
        status: LeadStatus::Unqualified,
        score: 12,
        notes: Some("No budget until next fiscal year."),
        age_days: 30,
    },
];

/// Repository answering every read with canned records and never persisting writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoRepository;

impl DemoRepository {
    pub fn new() -> Self {
        Self
    }

    fn organization_id() -> Result<OrganizationId, TypeConstraintError> {
        OrganizationId::new(DEMO_ORGANIZATION_ID)
    }

    fn build_lead(
        index: usize,
        demo: &DemoLead,
        now: NaiveDateTime,
    ) -> Result<Lead, TypeConstraintError> {
        let created_at = now - Duration::days(demo.age_days);
        Ok(Lead {
            id: LeadId::new(index as i32 + 1)?,
            organization_id: Self::organization_id()?,
            first_name: PersonName::new(demo.first_name)?,
            last_name: PersonName::new(demo.last_name)?,
            email: LeadEmail::new(demo.email)?,
            phone: demo.phone.map(PhoneNumber::new).transpose()?,
            company: Some(CompanyName::new(demo.company)?),
            title: Some(JobTitle::new(demo.title)?),
            source: Some(LeadSource::new(demo.source)?),
            status: demo.status,
            score: LeadScore::new(demo.score)?,
            notes: demo.notes.map(LeadNotes::new).transpose()?,
            created_by: Some(UserId::new(DEMO_USER_ID)?),
            created_at,
            updated_at: created_at,
        })
    }

    /// All canned leads, newest first.
    pub fn leads(&self) -> RepositoryResult<Vec<Lead>> {
        let now = Utc::now().naive_utc();
        DEMO_LEADS
            .iter()
            .enumerate()
            .map(|(index, demo)| Self::build_lead(index, demo, now))
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)
    }
}

fn matches_search(lead: &Lead, term: &str) -> bool {
    let term = term.to_lowercase();
    [
        Some(lead.first_name.as_str()),
        Some(lead.last_name.as_str()),
        Some(lead.email.as_str()),
        lead.company.as_ref().map(|c| c.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|value| value.to_lowercase().contains(&term))
}

impl UserReader for DemoRepository {
    fn get_user_by_external_id(
        &self,
        external_id: &ExternalUserId,
    ) -> RepositoryResult<Option<User>> {
        if external_id.as_str() != DEMO_SUBJECT {
            return Ok(None);
        }

        let user = User {
            id: UserId::new(DEMO_USER_ID)?,
            organization_id: Self::organization_id()?,
            external_id: external_id.clone(),
            email: UserEmail::new("demo@salescrm.app")?,
            name: PersonName::new("Demo User")?,
            role: UserRole::Admin,
            created_at: Utc::now().naive_utc(),
        };
        Ok(Some(user))
    }
}

impl LeadReader for DemoRepository {
    fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<(usize, Vec<Lead>)> {
        if query.organization_id.get() != DEMO_ORGANIZATION_ID {
            return Ok((0, Vec::new()));
        }

        let matching = self
            .leads()?
            .into_iter()
            .filter(|lead| query.status.is_none_or(|status| lead.status == status))
            .filter(|lead| {
                query
                    .search
                    .as_deref()
                    .is_none_or(|term| matches_search(lead, term))
            })
            .collect::<Vec<_>>();

        let total = matching.len();
        let page = match &query.pagination {
            Some(pagination) => matching
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.per_page)
                .collect(),
            None => matching,
        };

        Ok((total, page))
    }
}

impl LeadWriter for DemoRepository {
    fn create_lead(&self, lead: &NewLead) -> RepositoryResult<Lead> {
        let now = Utc::now().naive_utc();
        Ok(Lead {
            id: LeadId::new(DEMO_LEADS.len() as i32 + 1)?,
            organization_id: lead.organization_id,
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            company: lead.company.clone(),
            title: lead.title.clone(),
            source: lead.source.clone(),
            status: lead.status,
            score: lead.score,
            notes: lead.notes.clone(),
            created_by: lead.created_by,
            created_at: now,
            updated_at: now,
        })
    }
}

impl DatabaseProbe for DemoRepository {
    fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_org() -> OrganizationId {
        OrganizationId::new(DEMO_ORGANIZATION_ID).expect("valid org id")
    }

    #[test]
    fn canned_leads_are_valid_and_newest_first() {
        let leads = DemoRepository::new().leads().expect("canned leads are valid");
        assert_eq!(leads.len(), DEMO_LEADS.len());
        assert!(leads.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn list_filters_by_status_and_search() {
        let repo = DemoRepository::new();

        let (total, leads) = repo
            .list_leads(LeadListQuery::new(demo_org()).status(LeadStatus::Qualified))
            .expect("list");
        assert_eq!(total, 1);
        assert_eq!(leads[0].first_name.as_str(), "Sarah");

        let (total, leads) = repo
            .list_leads(LeadListQuery::new(demo_org()).search("FABRIKAM"))
            .expect("list");
        assert_eq!(total, 1);
        assert_eq!(leads[0].last_name.as_str(), "Webb");
    }

    #[test]
    fn list_paginates_but_reports_full_total() {
        let (total, leads) = DemoRepository::new()
            .list_leads(LeadListQuery::new(demo_org()).paginate(2, 2))
            .expect("list");
        assert_eq!(total, DEMO_LEADS.len());
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].id.get(), 3);
    }

    #[test]
    fn other_organizations_see_nothing() {
        let other = OrganizationId::new(99).expect("valid org id");
        let (total, leads) = DemoRepository::new()
            .list_leads(LeadListQuery::new(other))
            .expect("list");
        assert_eq!(total, 0);
        assert!(leads.is_empty());
    }

    #[test]
    fn only_the_demo_subject_has_a_user_row() {
        let repo = DemoRepository::new();
        let demo = ExternalUserId::new(DEMO_SUBJECT).expect("subject");
        let stranger = ExternalUserId::new("idp|someone").expect("subject");

        assert!(repo.get_user_by_external_id(&demo).expect("lookup").is_some());
        assert!(repo.get_user_by_external_id(&stranger).expect("lookup").is_none());
    }
}
