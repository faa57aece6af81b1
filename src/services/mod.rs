//! Business logic shared by the HTTP handlers.

pub mod assistant;
pub mod emails;
pub mod errors;
pub mod health;
pub mod leads;
pub mod onboarding;

pub use errors::{ServiceError, ServiceResult};
