//! Session-token verification and the `AuthenticatedUser` extractor.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::api::ErrorResponse;
use crate::models::config::AppMode;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("invalid session token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized"))
    }
}

/// Verifies HS256 session tokens issued by the identity provider.
pub struct SessionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    mode: AppMode,
    cookie_sessions: bool,
}

impl SessionVerifier {
    pub fn new(secret: &str, mode: AppMode) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            mode,
            cookie_sessions: false,
        }
    }

    /// Also accept tokens stored by `Identity::login`.
    ///
    /// Only enable this on apps that mount `IdentityMiddleware` and `SessionMiddleware`:
    /// reading the identity without them panics inside `actix-identity`.
    pub fn with_cookie_sessions(mut self) -> Self {
        self.cookie_sessions = true;
        self
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<AuthenticatedUser>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

/// Signs `user` the way the identity provider does. Used by tooling and tests.
pub fn issue_token(secret: &str, user: &AuthenticatedUser) -> Result<String, AuthError> {
    let token = encode(
        &Header::new(Algorithm::HS256),
        user,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn session_token(req: &HttpRequest) -> Option<String> {
    req.get_identity().ok()?.id().ok()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AuthError> {
    let Some(verifier) = req.app_data::<web::Data<SessionVerifier>>() else {
        log::error!("SessionVerifier is not registered as app data");
        return Err(AuthError::Unauthorized);
    };

    if verifier.mode().is_demo() {
        return Ok(AuthenticatedUser::demo());
    }

    let token = bearer_token(req)
        .or_else(|| {
            if verifier.cookie_sessions {
                session_token(req)
            } else {
                None
            }
        })
        .ok_or(AuthError::Unauthorized)?;

    verifier.verify(&token).inspect_err(|e| {
        log::warn!("Rejected session token for {}: {e}", req.path());
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;
    use chrono::{Duration, Utc};

    use super::*;

    const SECRET: &str = "2b7e151628aed2a6abf7158809cf4f3c";

    fn user(expires_in: Duration) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "idp|42".to_string(),
            email: "rep@acme.com".to_string(),
            name: "Rep".to_string(),
            exp: (Utc::now() + expires_in).timestamp() as usize,
        }
    }

    fn request(mode: AppMode, authorization: Option<String>) -> HttpRequest {
        let mut req =
            TestRequest::default().app_data(web::Data::new(SessionVerifier::new(SECRET, mode)));
        if let Some(value) = authorization {
            req = req.insert_header((header::AUTHORIZATION, value));
        }
        req.to_http_request()
    }

    #[test]
    fn valid_bearer_token_authenticates() {
        let token = issue_token(SECRET, &user(Duration::hours(1))).expect("token");

        let req = request(AppMode::Production, Some(format!("Bearer {token}")));
        let authenticated = authenticate(&req).expect("authenticated");

        assert_eq!(authenticated.sub, "idp|42");
    }

    #[test]
    fn missing_or_foreign_token_is_rejected() {
        let req = request(AppMode::Production, None);
        assert!(matches!(authenticate(&req), Err(AuthError::Unauthorized)));

        let forged = issue_token("another-secret-entirely", &user(Duration::hours(1)))
            .expect("token");
        let req = request(AppMode::Production, Some(format!("Bearer {forged}")));
        assert!(matches!(authenticate(&req), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token(SECRET, &user(Duration::hours(-2))).expect("token");

        let req = request(AppMode::Production, Some(format!("Bearer {token}")));

        assert!(authenticate(&req).is_err());
    }

    #[test]
    fn demo_mode_acts_as_the_demo_user() {
        let req = request(AppMode::Demo, None);

        let authenticated = authenticate(&req).expect("demo user");

        assert!(authenticated.is_demo());
    }

    #[test]
    fn rejection_renders_json_401() {
        let response = AuthError::Unauthorized.error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
