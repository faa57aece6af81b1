use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::{AssistantStatusResponse, CompletionResponse};
use crate::forms::assistant::CompletionForm;
use crate::integrations::Integrations;
use crate::routes::service_error_response;
use crate::services::assistant as service;

#[post("/claude")]
pub async fn complete(
    user: AuthenticatedUser,
    integrations: web::Data<Integrations>,
    form: web::Json<CompletionForm>,
) -> impl Responder {
    log::info!("assistant prompt from {}", user.sub);

    let result = service::complete(
        integrations.assistant.as_ref(),
        &integrations.assistant_model,
        form.into_inner(),
    )
    .await;

    match result {
        Ok(reply) => HttpResponse::Ok().json(CompletionResponse::from(reply)),
        Err(err) => service_error_response("Assistant completion failed", err),
    }
}

#[get("/claude")]
pub async fn status(
    _user: AuthenticatedUser,
    integrations: web::Data<Integrations>,
) -> impl Responder {
    HttpResponse::Ok().json(AssistantStatusResponse::from(service::status(&integrations)))
}
