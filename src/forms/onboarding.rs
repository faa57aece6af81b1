//! Payload for the simulated signup at `POST /api/demo-onboarding`.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{OrganizationName, OrganizationSlug, PersonName, UserEmail};
use crate::forms::{FormError, non_blank, required};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct DemoOnboardingForm {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub company_name: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub team_size: Option<String>,
    #[validate(length(max = 100))]
    pub industry: Option<String>,
}

pub struct DemoOnboardingPayload {
    pub organization_name: OrganizationName,
    pub organization_slug: OrganizationSlug,
    pub full_name: PersonName,
    pub email: UserEmail,
    pub team_size: Option<String>,
    pub industry: Option<String>,
}

impl TryFrom<DemoOnboardingForm> for DemoOnboardingPayload {
    type Error = FormError;

    fn try_from(form: DemoOnboardingForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let company_name = required(&form.company_name, "company_name")?;
        let organization_slug = OrganizationSlug::from_name(&company_name)
            .map_err(|_| FormError::InvalidOrganizationName)?;
        let organization_name =
            OrganizationName::new(company_name).map_err(|_| FormError::InvalidOrganizationName)?;
        let full_name = PersonName::new(required(&form.full_name, "full_name")?)
            .map_err(|_| FormError::InvalidName)?;
        let email = UserEmail::new(required(&form.email, "email")?)
            .map_err(|_| FormError::InvalidEmail)?;

        Ok(Self {
            organization_name,
            organization_slug,
            full_name,
            email,
            team_size: non_blank(form.team_size),
            industry: non_blank(form.industry),
        })
    }
}
