//! Simulated signup used by the public demo. Nothing is persisted.

use crate::domain::types::{OrganizationName, OrganizationSlug, PersonName, PublicId, UserEmail};
use crate::domain::user::UserRole;
use crate::forms::onboarding::{DemoOnboardingForm, DemoOnboardingPayload};
use crate::services::ServiceResult;

/// Where the browser goes once the demo account exists.
pub const ONBOARDING_REDIRECT: &str = "/dashboard";

#[derive(Debug)]
pub struct DemoOrganization {
    pub id: PublicId,
    pub name: OrganizationName,
    pub slug: OrganizationSlug,
}

#[derive(Debug)]
pub struct DemoAccount {
    pub id: PublicId,
    pub name: PersonName,
    pub email: UserEmail,
    pub role: UserRole,
}

#[derive(Debug)]
pub struct DemoOnboarding {
    pub organization: DemoOrganization,
    pub user: DemoAccount,
    pub redirect_to: &'static str,
}

pub fn start_demo(form: DemoOnboardingForm) -> ServiceResult<DemoOnboarding> {
    let payload = DemoOnboardingPayload::try_from(form)?;

    log::info!(
        "demo onboarding for {} ({} people, industry {})",
        payload.organization_slug,
        payload.team_size.as_deref().unwrap_or("unknown"),
        payload.industry.as_deref().unwrap_or("unknown"),
    );

    Ok(DemoOnboarding {
        organization: DemoOrganization {
            id: PublicId::new(),
            name: payload.organization_name,
            slug: payload.organization_slug,
        },
        user: DemoAccount {
            id: PublicId::new(),
            name: payload.full_name,
            email: payload.email,
            role: UserRole::Admin,
        },
        redirect_to: ONBOARDING_REDIRECT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;

    #[test]
    fn signup_yields_an_admin_with_fresh_ids() {
        let form = DemoOnboardingForm {
            company_name: "Contoso".to_string(),
            full_name: "Pat Lee".to_string(),
            email: "pat@contoso.com".to_string(),
            ..DemoOnboardingForm::default()
        };

        let demo = start_demo(form).expect("demo account");

        assert_eq!(demo.user.role, UserRole::Admin);
        assert_eq!(demo.organization.slug.as_str(), "contoso");
        assert_ne!(demo.organization.id, demo.user.id);
        assert_eq!(demo.redirect_to, "/dashboard");
    }

    #[test]
    fn missing_company_is_a_form_error() {
        let form = DemoOnboardingForm {
            full_name: "Pat Lee".to_string(),
            email: "pat@contoso.com".to_string(),
            ..DemoOnboardingForm::default()
        };

        match start_demo(form) {
            Err(ServiceError::Form(message)) => assert_eq!(message, "company_name is required"),
            other => panic!("expected form error, got {other:?}"),
        }
    }
}
