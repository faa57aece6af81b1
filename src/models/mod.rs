//! Database models shared across the CRM repository.

pub mod config;
pub mod lead;
pub mod organization;
pub mod user;
