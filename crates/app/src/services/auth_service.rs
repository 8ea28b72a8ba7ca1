//! Auth service: stateless username/password check.

use leaserelay_domain::credentials::{Credentials, LoginAttempt};
use leaserelay_domain::error::RelayError;

/// Result of a well-formed login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
}

/// Application service comparing login attempts against fixed credentials.
///
/// Holds no session, counter or lockout state: every call is independent.
pub struct AuthService {
    credentials: Credentials,
}

impl AuthService {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Check a login attempt.
    ///
    /// `None` means the request carried no usable body.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::MalformedRequest`] when `attempt` is `None`.
    pub fn login(&self, attempt: Option<&LoginAttempt>) -> Result<LoginOutcome, RelayError> {
        let Some(attempt) = attempt else {
            tracing::warn!("login request without a usable body");
            return Err(RelayError::MalformedRequest);
        };

        if self.credentials.accepts(attempt) {
            tracing::info!(username = ?attempt.username, "login accepted");
            Ok(LoginOutcome::Accepted)
        } else {
            tracing::warn!(username = ?attempt.username, "login rejected");
            Ok(LoginOutcome::Rejected)
        }
    }
}
