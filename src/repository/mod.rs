//! Persistence traits and their Diesel and demo implementations.

use crate::db::{DbConnection, DbPool};
use crate::domain::lead::{Lead, LeadStatus, NewLead};
use crate::domain::organization::{NewOrganization, Organization};
use crate::domain::types::{ExternalUserId, OrganizationId, OrganizationSlug};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;

pub mod demo;
pub mod errors;
pub mod lead;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod organization;
pub mod user;

pub use demo::DemoRepository;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
/// Upper bound on a single page of leads.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// Filters applied when listing the leads of one organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadListQuery {
    pub organization_id: OrganizationId,
    pub status: Option<LeadStatus>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl LeadListQuery {
    pub fn new(organization_id: OrganizationId) -> Self {
        Self {
            organization_id,
            status: None,
            search: None,
            pagination: None,
        }
    }

    pub fn status(mut self, status: LeadStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Diesel-backed repository shared by all handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait OrganizationReader {
    fn get_organization_by_slug(
        &self,
        slug: &OrganizationSlug,
    ) -> RepositoryResult<Option<Organization>>;
}

pub trait OrganizationWriter {
    fn create_organization(&self, organization: &NewOrganization)
    -> RepositoryResult<Organization>;
}

pub trait UserReader {
    fn get_user_by_external_id(&self, external_id: &ExternalUserId)
    -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User>;
}

pub trait LeadReader {
    /// Returns the total number of matching leads and the requested page.
    fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<(usize, Vec<Lead>)>;
}

pub trait LeadWriter {
    fn create_lead(&self, lead: &NewLead) -> RepositoryResult<Lead>;
}

/// Cheap round trip used by the database health endpoint.
pub trait DatabaseProbe {
    fn ping(&self) -> RepositoryResult<()>;
}

/// Everything the HTTP layer needs from a backing store.
pub trait CrmRepository: UserReader + LeadReader + LeadWriter + DatabaseProbe + Send + Sync {}

impl<T> CrmRepository for T where
    T: UserReader + LeadReader + LeadWriter + DatabaseProbe + Send + Sync
{
}

impl DatabaseProbe for DieselRepository {
    fn ping(&self) -> RepositoryResult<()> {
        use diesel::RunQueryDsl;

        let mut conn = self.conn()?;
        diesel::sql_query("SELECT 1").execute(&mut conn)?;
        Ok(())
    }
}
