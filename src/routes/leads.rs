use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::{LeadResponse, LeadsResponse};
use crate::forms::leads::CreateLeadForm;
use crate::repository::CrmRepository;
use crate::routes::service_error_response;
use crate::services::leads::{self as service, LeadsQuery};

#[derive(Deserialize)]
struct LeadsQueryParams {
    status: Option<String>,
    search: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

#[get("/leads")]
pub async fn list_leads(
    user: AuthenticatedUser,
    params: web::Query<LeadsQueryParams>,
    repo: web::Data<dyn CrmRepository>,
) -> impl Responder {
    let params = params.into_inner();
    let query = LeadsQuery {
        status: params.status,
        search: params.search,
        page: params.page,
        per_page: params.per_page,
    };

    match service::list_leads(repo.get_ref(), &user, query) {
        Ok(page) => HttpResponse::Ok().json(LeadsResponse::from(page)),
        Err(err) => service_error_response("Failed to list leads", err),
    }
}

#[post("/leads")]
pub async fn create_lead(
    user: AuthenticatedUser,
    repo: web::Data<dyn CrmRepository>,
    form: web::Json<CreateLeadForm>,
) -> impl Responder {
    match service::create_lead(repo.get_ref(), &user, form.into_inner()) {
        Ok(lead) => HttpResponse::Created().json(LeadResponse { lead }),
        Err(err) => service_error_response("Failed to create lead", err),
    }
}
