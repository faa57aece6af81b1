use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use reqwest::Url;
use serde::Deserialize;

use crate::auth::SessionVerifier;
use crate::dto::api::ErrorResponse;
use crate::models::config::ServerConfig;
use crate::routes::redirect;

#[derive(Deserialize)]
struct CallbackParams {
    token: Option<String>,
}

/// Sends the browser to the identity provider, which returns to `/auth/callback`.
#[get("/auth/signin")]
pub async fn signin(
    req: HttpRequest,
    server_config: web::Data<ServerConfig>,
    verifier: web::Data<SessionVerifier>,
) -> impl Responder {
    if verifier.mode().is_demo() {
        return redirect("/dashboard");
    }

    let connection = req.connection_info();
    let callback_url = format!("{}://{}/auth/callback", connection.scheme(), connection.host());

    let auth_service_url = &server_config.auth_service_url;
    match Url::parse_with_params(auth_service_url, &[("redirect_uri", callback_url)]) {
        Ok(url) => redirect(url.as_str()),
        Err(e) => {
            log::error!("Invalid auth_service_url '{auth_service_url}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/auth/callback")]
pub async fn callback(
    req: HttpRequest,
    params: web::Query<CallbackParams>,
    verifier: web::Data<SessionVerifier>,
) -> impl Responder {
    let Some(token) = params.into_inner().token.filter(|t| !t.trim().is_empty()) else {
        return HttpResponse::BadRequest().json(ErrorResponse::new("token is required"));
    };

    let user = match verifier.verify(&token) {
        Ok(user) => user,
        Err(e) => {
            log::error!("Sign-in callback rejected: {e}");
            return HttpResponse::BadRequest().json(ErrorResponse::new("Invalid session token"));
        }
    };

    if let Err(e) = Identity::login(&req.extensions(), token) {
        log::error!("Failed to start session for {}: {e}", user.sub);
        return HttpResponse::InternalServerError().finish();
    }

    log::info!("{} signed in", user.sub);
    redirect("/dashboard")
}

#[post("/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    redirect("/")
}
