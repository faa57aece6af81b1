//! Seeds an organization, a user bound to an identity-provider subject and sample leads.
//!
//! Usage: `seed_demo [SUBJECT] [EMAIL] [NAME]`

use std::env;

use chrono::{Duration, Utc};
use dotenvy::dotenv;

use sales_crm::auth::issue_token;
use sales_crm::db::establish_connection_pool;
use sales_crm::domain::auth::AuthenticatedUser;
use sales_crm::domain::lead::NewLead;
use sales_crm::domain::organization::{NewOrganization, Organization};
use sales_crm::domain::types::{
    ExternalUserId, OrganizationName, OrganizationSlug, PersonName, UserEmail,
};
use sales_crm::domain::user::{NewUser, User, UserRole};
use sales_crm::load_server_config;
use sales_crm::repository::errors::{RepositoryError, RepositoryResult};
use sales_crm::repository::{
    DemoRepository, DieselRepository, LeadWriter, OrganizationReader, OrganizationWriter,
    UserReader, UserWriter,
};

const ORGANIZATION_NAME: &str = "Demo Sales Co";

fn ensure_organization<R>(repo: &R) -> RepositoryResult<Organization>
where
    R: OrganizationReader + OrganizationWriter,
{
    let slug = OrganizationSlug::from_name(ORGANIZATION_NAME)?;
    if let Some(existing) = repo.get_organization_by_slug(&slug)? {
        log::info!("Organization {} already exists", existing.slug);
        return Ok(existing);
    }

    let name = OrganizationName::new(ORGANIZATION_NAME)?;
    repo.create_organization(&NewOrganization::new(name, slug))
}

fn ensure_user<R>(
    repo: &R,
    organization: &Organization,
    identity: &AuthenticatedUser,
) -> RepositoryResult<User>
where
    R: UserReader + UserWriter,
{
    let external_id = ExternalUserId::new(identity.sub.as_str())?;
    if let Some(existing) = repo.get_user_by_external_id(&external_id)? {
        if existing.organization_id != organization.id {
            return Err(RepositoryError::ConstraintViolation(format!(
                "user {} belongs to another organization",
                external_id.as_str()
            )));
        }
        log::info!("User {} already exists", external_id.as_str());
        return Ok(existing);
    }

    let new_user = NewUser::new(
        organization.id,
        external_id,
        UserEmail::new(identity.email.as_str())?,
        PersonName::new(identity.name.as_str())?,
        UserRole::Admin,
    );
    repo.create_user(&new_user)
}

fn seed_leads<R>(repo: &R, organization: &Organization, owner: &User) -> RepositoryResult<usize>
where
    R: LeadWriter,
{
    let samples = DemoRepository::new().leads()?;
    for sample in &samples {
        let mut lead = NewLead::new(
            organization.id,
            sample.first_name.clone(),
            sample.last_name.clone(),
            sample.email.clone(),
        )
        .status(sample.status)
        .score(sample.score)
        .created_by(owner.id);
        lead.phone = sample.phone.clone();
        lead.company = sample.company.clone();
        lead.title = sample.title.clone();
        lead.source = sample.source.clone();
        lead.notes = sample.notes.clone();

        repo.create_lead(&lead)?;
    }
    Ok(samples.len())
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_server_config() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    if server_config.mode().is_demo() {
        log::error!("Refusing to seed: configuration resolves to demo mode");
        std::process::exit(1);
    }

    let mut args = env::args().skip(1);
    let identity = AuthenticatedUser {
        sub: args.next().unwrap_or_else(|| "seed-admin".to_string()),
        email: args.next().unwrap_or_else(|| "admin@demosales.co".to_string()),
        name: args.next().unwrap_or_else(|| "Seed Admin".to_string()),
        exp: (Utc::now() + Duration::hours(12)).timestamp() as usize,
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let seeded = ensure_organization(&repo).and_then(|organization| {
        let owner = ensure_user(&repo, &organization, &identity)?;
        let leads = seed_leads(&repo, &organization, &owner)?;
        Ok((organization, leads))
    });

    match seeded {
        Ok((organization, leads)) => {
            log::info!("Seeded {leads} leads into organization {}", organization.slug);
        }
        Err(e) => {
            log::error!("Seeding failed: {e}");
            std::process::exit(1);
        }
    }

    match issue_token(&server_config.secret, &identity) {
        Ok(token) => println!("{token}"),
        Err(e) => {
            log::error!("Failed to issue a session token: {e}");
            std::process::exit(1);
        }
    }
}
