//! Identity of the caller as asserted by the identity provider.

use serde::{Deserialize, Serialize};

/// Subject used for every request while the application runs in demo mode.
pub const DEMO_SUBJECT: &str = "demo-user";

/// Claims carried by a verified session token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Identity-provider subject, matched against `users.external_id`.
    pub sub: String,
    pub email: String,
    pub name: String,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

impl AuthenticatedUser {
    /// The canned user every request acts as in demo mode.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            sub: DEMO_SUBJECT.to_string(),
            email: "demo@salescrm.app".to_string(),
            name: "Demo User".to_string(),
            exp: usize::MAX,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.sub == DEMO_SUBJECT
    }
}
