use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{
    App, HttpResponse,
    http::{StatusCode, header},
    test, web,
};

use sales_crm::auth::SessionVerifier;
use sales_crm::middleware::RedirectUnauthorized;
use sales_crm::models::config::AppMode;
use sales_crm::routes::page_routes;
use tera::Tera;

#[actix_web::test]
async fn redirects_unauthorized_to_signin() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Unauthorized().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/auth/signin"
    );
}

#[actix_web::test]
async fn success_response_passes_through() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

const SECRET: &str = "0f1e2d3c4b5a69788796a5b4c3d2e1f0";

#[actix_web::test]
async fn dashboard_without_session_redirects_to_signin() {
    let app = test::init_service(
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(web::Data::new(
                SessionVerifier::new(SECRET, AppMode::Production).with_cookie_sessions(),
            ))
            .app_data(web::Data::new(AppMode::Production))
            .app_data(web::Data::new(Tera::new("templates/**/*").unwrap()))
            .service(web::scope("").wrap(RedirectUnauthorized).configure(page_routes)),
    )
    .await;

    let req = test::TestRequest::get().uri("/dashboard/leads").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/auth/signin"
    );
}

#[actix_web::test]
async fn bearer_only_app_rejects_without_identity_middleware() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(SessionVerifier::new(
                SECRET,
                AppMode::Production,
            )))
            .app_data(web::Data::new(AppMode::Production))
            .app_data(web::Data::new(Tera::new("templates/**/*").unwrap()))
            .service(web::scope("").wrap(RedirectUnauthorized).configure(page_routes)),
    )
    .await;

    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}
