//! HTTP handlers and the helpers they share.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, error, web};
use tera::{Context, Tera};

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod assistant;
pub mod auth;
pub mod emails;
pub mod health;
pub mod leads;
pub mod onboarding;
pub mod pages;

/// Registers every `/api` endpoint.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(leads::list_leads)
        .service(leads::create_lead)
        .service(emails::list_emails)
        .service(emails::sync_emails)
        .service(onboarding::demo_onboarding)
        .service(health::database_health)
        .service(assistant::complete)
        .service(assistant::status);
}

/// Registers the sign-in flow. These must stay reachable without a session.
pub fn auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::signin)
        .service(auth::callback)
        .service(auth::logout);
}

/// Registers the dashboard pages. Wrap the scope with `RedirectUnauthorized`.
pub fn page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::index)
        .service(pages::dashboard)
        .service(pages::dashboard_section);
}

/// Maps a service failure onto the JSON error body and its status code.
pub fn service_error_response(context: &str, err: ServiceError) -> HttpResponse {
    log::error!("{context}: {err}");

    match err {
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized"))
        }
        ServiceError::NotFound(message) => {
            HttpResponse::NotFound().json(ErrorResponse::new(message))
        }
        ServiceError::NotImplemented(message) => {
            HttpResponse::NotImplemented().json(ErrorResponse::new(message))
        }
        ServiceError::Upstream(_) | ServiceError::Repository(_) => {
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

/// JSON body extractor settings: malformed bodies answer with a JSON 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req: &HttpRequest| {
            log::error!("Rejected JSON body: {err}");
            let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
            error::InternalError::from_response(err, response).into()
        })
}

/// Query string settings: malformed parameters answer with a JSON 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        log::error!("Rejected query string: {err}");
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;
    use crate::repository::errors::RepositoryError;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Form("email is required".into()), StatusCode::BAD_REQUEST),
            (ServiceError::TypeConstraint("bad".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ServiceError::NotFound("User not found".into()), StatusCode::NOT_FOUND),
            (ServiceError::NotImplemented("later".into()), StatusCode::NOT_IMPLEMENTED),
            (ServiceError::Upstream("timeout".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ServiceError::Repository(RepositoryError::ConnectionError("pool".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(service_error_response("test", err).status(), expected);
        }
    }
}
