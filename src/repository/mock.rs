//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::lead::{Lead, NewLead};
use crate::domain::types::ExternalUserId;
use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DatabaseProbe, LeadListQuery, LeadReader, LeadWriter, UserReader};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_external_id(
            &self,
            external_id: &ExternalUserId,
        ) -> RepositoryResult<Option<User>>;
    }

    impl LeadReader for Repository {
        fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<(usize, Vec<Lead>)>;
    }

    impl LeadWriter for Repository {
        fn create_lead(&self, lead: &NewLead) -> RepositoryResult<Lead>;
    }

    impl DatabaseProbe for Repository {
        fn ping(&self) -> RepositoryResult<()>;
    }
}
