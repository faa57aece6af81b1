use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::EmailsResponse;
use crate::integrations::Integrations;
use crate::routes::service_error_response;
use crate::services::emails::{self as service, EmailsQuery};

#[derive(Deserialize)]
struct EmailsQueryParams {
    limit: Option<usize>,
    #[serde(default)]
    unread_only: bool,
}

#[get("/integrations/microsoft/emails")]
pub async fn list_emails(
    user: AuthenticatedUser,
    params: web::Query<EmailsQueryParams>,
    integrations: web::Data<Integrations>,
) -> impl Responder {
    let query = EmailsQuery {
        limit: params.limit,
        unread_only: params.unread_only,
    };

    let inbox = service::list_emails(&user, integrations.microsoft_connected, query);
    HttpResponse::Ok().json(EmailsResponse::from(inbox))
}

#[post("/integrations/microsoft/emails")]
pub async fn sync_emails(user: AuthenticatedUser) -> impl Responder {
    service_error_response("Email sync failed", service::sync_emails(&user))
}
