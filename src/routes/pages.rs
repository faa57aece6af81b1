use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::domain::auth::AuthenticatedUser;
use crate::dto::pages::{DashboardSection, OVERVIEW, SECTIONS, find_section};
use crate::models::config::AppMode;
use crate::routes::{redirect, render_template};

fn render_section(
    tera: &Tera,
    user: &AuthenticatedUser,
    mode: AppMode,
    section: &DashboardSection,
) -> HttpResponse {
    let mut context = Context::new();
    context.insert("current_user", user);
    context.insert("current_page", section.slug);
    context.insert("section", section);
    context.insert("sections", SECTIONS);
    context.insert("demo_mode", &mode.is_demo());

    render_template(tera, "dashboard/page.html", &context)
}

#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/dashboard")
}

#[get("/dashboard")]
pub async fn dashboard(
    user: AuthenticatedUser,
    tera: web::Data<Tera>,
    mode: web::Data<AppMode>,
) -> impl Responder {
    render_section(&tera, &user, *mode.get_ref(), &OVERVIEW)
}

#[get("/dashboard/{section}")]
pub async fn dashboard_section(
    user: AuthenticatedUser,
    section: web::Path<String>,
    tera: web::Data<Tera>,
    mode: web::Data<AppMode>,
) -> impl Responder {
    match find_section(&section) {
        Some(section) => render_section(&tera, &user, *mode.get_ref(), section),
        None => HttpResponse::NotFound().body("Page not found"),
    }
}
