//! Credentials accepted by `POST /login`.

use std::fmt;

use serde::Deserialize;

/// The username/password pair the relay was started with.
///
/// Fixed at startup and never mutated. `Debug` hides the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Byte-for-byte comparison against a login attempt.
    ///
    /// A missing field never matches.
    #[must_use]
    pub fn accepts(&self, attempt: &LoginAttempt) -> bool {
        attempt.username.as_deref() == Some(self.username.as_str())
            && attempt.password.as_deref() == Some(self.password.as_str())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of a `POST /login` request.
#[derive(Default, Deserialize)]
pub struct LoginAttempt {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginAttempt {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
