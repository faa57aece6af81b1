//! Request payloads accepted by the JSON API and their validation.

use thiserror::Error;
use validator::ValidationErrors;

pub mod assistant;
pub mod leads;
pub mod onboarding;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid lead status")]
    InvalidStatus,

    #[error("score must be between 0 and 100")]
    InvalidScore,

    #[error("invalid organization name")]
    InvalidOrganizationName,
}

/// Trims an optional text field, treating blank input as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Returns the trimmed value of a required text field.
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}
