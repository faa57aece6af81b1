//! Domain aggregates exposed by the CRM service layer.

pub mod auth;
pub mod email;
pub mod lead;
pub mod organization;
pub mod types;
pub mod user;
