#![allow(dead_code)]

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use sales_crm::db::{DbPool, establish_connection_pool};
use sales_crm::domain::organization::{NewOrganization, Organization};
use sales_crm::domain::types::{
    ExternalUserId, OrganizationName, OrganizationSlug, PersonName, UserEmail,
};
use sales_crm::domain::user::{NewUser, User, UserRole};
use sales_crm::repository::{DieselRepository, OrganizationWriter, UserWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// A migrated SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

pub fn create_organization(repo: &DieselRepository, name: &str) -> Organization {
    let new_organization = NewOrganization::new(
        OrganizationName::new(name).expect("valid name"),
        OrganizationSlug::from_name(name).expect("valid slug"),
    );
    repo.create_organization(&new_organization)
        .expect("create organization")
}

pub fn create_user(repo: &DieselRepository, organization: &Organization, subject: &str) -> User {
    let new_user = NewUser::new(
        organization.id,
        ExternalUserId::new(subject).expect("valid subject"),
        UserEmail::new(format!("{}@example.com", subject.replace('|', ".")))
            .expect("valid email"),
        PersonName::new("Test User").expect("valid name"),
        UserRole::Rep,
    );
    repo.create_user(&new_user).expect("create user")
}
