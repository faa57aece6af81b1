//! Repository implementation for organizations.

use diesel::prelude::*;

use crate::domain::organization::{NewOrganization, Organization};
use crate::domain::types::OrganizationSlug;
use crate::models::organization::{
    NewOrganization as DbNewOrganization, Organization as DbOrganization,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, OrganizationReader, OrganizationWriter};

impl OrganizationReader for DieselRepository {
    fn get_organization_by_slug(
        &self,
        slug: &OrganizationSlug,
    ) -> RepositoryResult<Option<Organization>> {
        use crate::schema::organizations;

        let mut conn = self.conn()?;
        let db_organization = organizations::table
            .filter(organizations::slug.eq(slug.as_str()))
            .first::<DbOrganization>(&mut conn)
            .optional()?;

        db_organization
            .map(Organization::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl OrganizationWriter for DieselRepository {
    fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> RepositoryResult<Organization> {
        use crate::schema::organizations;

        let mut conn = self.conn()?;
        let insertable: DbNewOrganization = organization.into();

        let db_organization = diesel::insert_into(organizations::table)
            .values(&insertable)
            .get_result::<DbOrganization>(&mut conn)?;

        Organization::try_from(db_organization).map_err(RepositoryError::from)
    }
}
