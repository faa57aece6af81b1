use sales_crm::domain::lead::{LeadStatus, NewLead};
use sales_crm::domain::types::{
    CompanyName, ExternalUserId, LeadEmail, LeadScore, OrganizationId, OrganizationSlug,
    PersonName, PhoneNumber,
};
use sales_crm::domain::user::UserRole;
use sales_crm::repository::errors::RepositoryError;
use sales_crm::repository::{
    DieselRepository, LeadListQuery, LeadReader, LeadWriter, OrganizationReader, UserReader,
};

mod common;

fn new_lead(organization_id: OrganizationId, first: &str, last: &str, company: &str) -> NewLead {
    let email = format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase());
    NewLead::new(
        organization_id,
        PersonName::new(first).unwrap(),
        PersonName::new(last).unwrap(),
        LeadEmail::new(email).unwrap(),
    )
    .company(CompanyName::new(company).unwrap())
}

fn seed(repo: &DieselRepository, organization_id: OrganizationId) {
    repo.create_lead(&new_lead(organization_id, "Alice", "Smith", "Acme"))
        .unwrap();
    repo.create_lead(
        &new_lead(organization_id, "Bob", "Jones", "Globex").status(LeadStatus::Qualified),
    )
    .unwrap();
    repo.create_lead(&new_lead(organization_id, "Carol", "White", "Initech"))
        .unwrap();
}

#[test]
fn test_organization_and_user_lookup() {
    let test_db = common::TestDb::new("test_organization_and_user_lookup.db");
    let repo = test_db.repository();

    let organization = common::create_organization(&repo, "Acme Widgets, Inc.");
    assert_eq!(organization.slug.as_str(), "acme-widgets-inc");

    let found = repo
        .get_organization_by_slug(&OrganizationSlug::new("acme-widgets-inc").unwrap())
        .unwrap()
        .expect("organization exists");
    assert_eq!(found.id, organization.id);

    let user = common::create_user(&repo, &organization, "idp|alice");
    assert_eq!(user.role, UserRole::Rep);

    let loaded = repo
        .get_user_by_external_id(&ExternalUserId::new("idp|alice").unwrap())
        .unwrap()
        .expect("user exists");
    assert_eq!(loaded.id, user.id);
    assert_eq!(loaded.organization_id, organization.id);

    let missing = repo
        .get_user_by_external_id(&ExternalUserId::new("idp|nobody").unwrap())
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_duplicate_slug_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_slug.db");
    let repo = test_db.repository();

    common::create_organization(&repo, "Acme");
    let duplicate = sales_crm::domain::organization::NewOrganization::new(
        sales_crm::domain::types::OrganizationName::new("ACME").unwrap(),
        OrganizationSlug::from_name("ACME").unwrap(),
    );

    let err = sales_crm::repository::OrganizationWriter::create_organization(&repo, &duplicate)
        .expect_err("slug is unique");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_lead_create_keeps_optional_fields() {
    let test_db = common::TestDb::new("test_lead_create.db");
    let repo = test_db.repository();
    let organization = common::create_organization(&repo, "Acme");
    let owner = common::create_user(&repo, &organization, "idp|owner");

    let mut lead = new_lead(organization.id, "Dana", "Scully", "FBI")
        .status(LeadStatus::Contacted)
        .score(LeadScore::new(55).unwrap())
        .created_by(owner.id);
    lead.phone = Some(PhoneNumber::new("+1 415 555 0132").unwrap());

    let created = repo.create_lead(&lead).unwrap();

    assert_eq!(created.organization_id, organization.id);
    assert_eq!(created.status, LeadStatus::Contacted);
    assert_eq!(created.score.get(), 55);
    assert_eq!(created.created_by, Some(owner.id));
    assert_eq!(created.phone.as_ref().map(|p| p.as_str()), Some("+14155550132"));
    assert_eq!(created.company.as_ref().map(|c| c.as_str()), Some("FBI"));
    assert!(created.title.is_none());
}

#[test]
fn test_lead_listing_filters_and_paginates() {
    let test_db = common::TestDb::new("test_lead_listing.db");
    let repo = test_db.repository();
    let organization = common::create_organization(&repo, "Acme");
    seed(&repo, organization.id);

    let (total, leads) = repo.list_leads(LeadListQuery::new(organization.id)).unwrap();
    assert_eq!(total, 3);
    assert_eq!(leads[0].first_name.as_str(), "Carol");

    let (total, leads) = repo
        .list_leads(LeadListQuery::new(organization.id).status(LeadStatus::Qualified))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(leads[0].first_name.as_str(), "Bob");

    let (total, leads) = repo
        .list_leads(LeadListQuery::new(organization.id).search("glob"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(leads[0].last_name.as_str(), "Jones");

    let (total, leads) = repo
        .list_leads(LeadListQuery::new(organization.id).paginate(2, 2))
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].first_name.as_str(), "Alice");
}

#[test]
fn test_lead_search_treats_wildcards_literally() {
    let test_db = common::TestDb::new("test_lead_search_wildcards.db");
    let repo = test_db.repository();
    let organization = common::create_organization(&repo, "Acme");
    seed(&repo, organization.id);
    repo.create_lead(&new_lead(organization.id, "Dana", "Reyes", "100% Organic"))
        .unwrap();

    let (total, leads) = repo
        .list_leads(LeadListQuery::new(organization.id).search("%"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(leads[0].first_name.as_str(), "Dana");

    let (total, leads) = repo
        .list_leads(LeadListQuery::new(organization.id).search("_"))
        .unwrap();
    assert_eq!(total, 0);
    assert!(leads.is_empty());
}

#[test]
fn test_lead_page_past_the_end_is_empty() {
    let test_db = common::TestDb::new("test_lead_page_past_end.db");
    let repo = test_db.repository();
    let organization = common::create_organization(&repo, "Acme");
    seed(&repo, organization.id);

    let (total, leads) = repo
        .list_leads(LeadListQuery::new(organization.id).paginate(usize::MAX, 20))
        .unwrap();
    assert_eq!(total, 3);
    assert!(leads.is_empty());
}

#[test]
fn test_leads_never_cross_organizations() {
    let test_db = common::TestDb::new("test_lead_isolation.db");
    let repo = test_db.repository();
    let acme = common::create_organization(&repo, "Acme");
    let globex = common::create_organization(&repo, "Globex");
    seed(&repo, acme.id);

    let (total, leads) = repo.list_leads(LeadListQuery::new(globex.id)).unwrap();
    assert_eq!(total, 0);
    assert!(leads.is_empty());

    repo.create_lead(&new_lead(globex.id, "Eve", "Polastri", "MI6"))
        .unwrap();
    let (total, leads) = repo
        .list_leads(LeadListQuery::new(acme.id).search("Eve"))
        .unwrap();
    assert_eq!(total, 0);
    assert!(leads.is_empty());
}

#[test]
fn test_lead_for_unknown_organization_is_rejected() {
    let test_db = common::TestDb::new("test_lead_unknown_org.db");
    let repo = test_db.repository();

    let err = repo
        .create_lead(&new_lead(OrganizationId::new(404).unwrap(), "Ann", "Lee", "X"))
        .expect_err("foreign key enforced");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}
