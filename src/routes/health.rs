use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::DatabaseHealthResponse;
use crate::models::config::AppMode;
use crate::repository::CrmRepository;
use crate::services::health::check_database;

#[get("/health/database")]
pub async fn database_health(
    repo: web::Data<dyn CrmRepository>,
    mode: web::Data<AppMode>,
) -> impl Responder {
    let health = check_database(repo.get_ref(), *mode.get_ref());

    if health.is_healthy() {
        HttpResponse::Ok().json(DatabaseHealthResponse::from(health))
    } else {
        HttpResponse::InternalServerError().json(DatabaseHealthResponse::from(health))
    }
}
