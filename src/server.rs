//! Configuration loading and the HTTP server bootstrap.

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::auth::SessionVerifier;
use crate::db::establish_connection_pool;
use crate::integrations::Integrations;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::{CrmRepository, DemoRepository, DieselRepository};
use crate::routes;

/// Loads `config/default.yaml`, the `APP_ENV` profile (defaults to `local`) and `APP_*` variables.
pub fn load_server_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    config::Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<ServerConfig>()
}

fn session_key(secret: &str) -> Key {
    // `Key::from` needs at least 64 bytes of key material.
    if secret.len() >= 64 {
        Key::from(secret.as_bytes())
    } else {
        log::warn!("secret is shorter than 64 bytes, sessions will not survive a restart");
        Key::generate()
    }
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let mode = server_config.mode();
    log::info!("Starting in {mode} mode");

    let repo: Arc<dyn CrmRepository> = if mode.is_demo() {
        Arc::new(DemoRepository::new())
    } else {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;
        Arc::new(DieselRepository::new(pool))
    };
    let repo = web::Data::from(repo);

    let integrations = Integrations::from_config(&server_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build integrations: {e}")))?;
    let integrations = web::Data::new(integrations);

    let verifier = SessionVerifier::new(&server_config.secret, mode).with_cookie_sessions();
    let verifier = web::Data::new(verifier);
    let secret_key = session_key(&server_config.secret);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
    let tera = web::Data::new(tera);

    let bind_address = (server_config.address.clone(), server_config.port);
    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(server_config.cookie_secure)
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .app_data(tera.clone())
            .app_data(repo.clone())
            .app_data(integrations.clone())
            .app_data(verifier.clone())
            .app_data(web::Data::new(mode))
            .app_data(server_config.clone())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").configure(routes::api_routes))
            .configure(routes::auth_routes)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .configure(routes::page_routes),
            )
    })
    .bind(bind_address)?
    .run()
    .await
}
