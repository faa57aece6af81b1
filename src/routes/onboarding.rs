use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::api::OnboardingResponse;
use crate::forms::onboarding::DemoOnboardingForm;
use crate::routes::service_error_response;
use crate::services::onboarding::start_demo;

#[post("/demo-onboarding")]
pub async fn demo_onboarding(form: web::Json<DemoOnboardingForm>) -> impl Responder {
    match start_demo(form.into_inner()) {
        Ok(onboarding) => HttpResponse::Ok().json(OnboardingResponse::from(onboarding)),
        Err(err) => service_error_response("Demo onboarding failed", err),
    }
}
