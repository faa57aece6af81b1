use crate::domain::auth::AuthenticatedUser;
use crate::domain::lead::{Lead, LeadStatus};
use crate::domain::types::ExternalUserId;
use crate::domain::user::User;
use crate::forms::leads::{CreateLeadForm, CreateLeadPayload};
use crate::repository::{
    DEFAULT_ITEMS_PER_PAGE, LeadListQuery, LeadReader, LeadWriter, MAX_ITEMS_PER_PAGE, UserReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by `GET /api/leads`.
#[derive(Debug, Default)]
pub struct LeadsQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// One page of leads together with the size of the full result set.
#[derive(Debug)]
pub struct LeadsPage {
    pub leads: Vec<Lead>,
    pub total: usize,
    pub page: usize,
}

/// Resolves the CRM user row backing the authenticated identity.
pub fn current_user<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    let external_id =
        ExternalUserId::new(user.sub.as_str()).map_err(|_| ServiceError::Unauthorized)?;

    repo.get_user_by_external_id(&external_id)?
        .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))
}

/// Lists the leads of the caller's organization, newest first.
pub fn list_leads<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: LeadsQuery,
) -> ServiceResult<LeadsPage>
where
    R: UserReader + LeadReader + ?Sized,
{
    let owner = current_user(repo, user)?;

    let page = params.page.unwrap_or(1).max(1);
    let per_page = params
        .per_page
        .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
        .clamp(1, MAX_ITEMS_PER_PAGE);

    let mut query = LeadListQuery::new(owner.organization_id).paginate(page, per_page);

    if let Some(status) = params
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        query = query.status(status.parse::<LeadStatus>()?);
    }

    if let Some(term) = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        query = query.search(term);
    }

    let (total, leads) = repo.list_leads(query)?;

    Ok(LeadsPage { leads, total, page })
}

/// Creates a lead in the caller's organization, authored by the caller.
pub fn create_lead<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CreateLeadForm,
) -> ServiceResult<Lead>
where
    R: UserReader + LeadWriter + ?Sized,
{
    let owner = current_user(repo, user)?;

    let payload = CreateLeadPayload::try_from(form)?;
    let new_lead = payload.into_domain(owner.organization_id, owner.id);

    let lead = repo.create_lead(&new_lead)?;
    log::info!(
        "lead {} created in organization {} by {}",
        lead.id,
        lead.organization_id,
        owner.external_id.as_str()
    );

    Ok(lead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::DemoRepository;

    fn stranger() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "idp|unknown".to_string(),
            email: "stranger@example.com".to_string(),
            name: "Stranger".to_string(),
            exp: 0,
        }
    }

    #[test]
    fn unknown_user_is_not_found() {
        let repo = DemoRepository::new();

        let result = list_leads(&repo, &stranger(), LeadsQuery::default());

        match result {
            Err(ServiceError::NotFound(message)) => assert_eq!(message, "User not found"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn empty_subject_is_unauthorized() {
        let repo = DemoRepository::new();
        let mut user = stranger();
        user.sub = "  ".to_string();

        assert!(matches!(
            current_user(&repo, &user),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn lists_demo_leads_with_page_metadata() {
        let repo = DemoRepository::new();
        let params = LeadsQuery {
            page: Some(2),
            per_page: Some(2),
            ..LeadsQuery::default()
        };

        let page = list_leads(&repo, &AuthenticatedUser::demo(), params).expect("leads");

        assert_eq!(page.page, 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.leads.len(), 2);
    }

    #[test]
    fn invalid_status_filter_is_rejected() {
        let repo = DemoRepository::new();
        let params = LeadsQuery {
            status: Some("won".to_string()),
            ..LeadsQuery::default()
        };

        let result = list_leads(&repo, &AuthenticatedUser::demo(), params);

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }

    #[test]
    fn create_reports_missing_fields() {
        let repo = DemoRepository::new();
        let form = CreateLeadForm {
            first_name: "Ada".to_string(),
            ..CreateLeadForm::default()
        };

        match create_lead(&repo, &AuthenticatedUser::demo(), form) {
            Err(ServiceError::Form(message)) => assert_eq!(message, "last_name is required"),
            other => panic!("expected form error, got {other:?}"),
        }
    }
}
