// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Administrative authorization capability.
//!
//! The admin surface only ever asks one question - "may this caller mutate
//! the catalogue?" - so the capability is a single-method trait. The bundled
//! implementation is the directory's historical password/session scheme:
//! password from the environment, sessions valid for seven days.

use chrono::Utc;

/// Capability check consulted before any catalogue mutation.
pub trait Authorizer {
    fn is_authorized(&self) -> bool;
}

/// How long an admin session stays valid.
pub const SESSION_DURATION_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Environment variable holding the admin password.
pub const PASSWORD_ENV: &str = "WAYMARK_ADMIN_PASSWORD";

/// Password verifier backed by the environment.
#[derive(Debug, Clone)]
pub struct PasswordAuthorizer {
    password: String,
}

impl PasswordAuthorizer {
    /// Read the password from [`PASSWORD_ENV`], falling back to the
    /// development default. Deployments must set the variable.
    pub fn from_env() -> Self {
        PasswordAuthorizer {
            password: std::env::var(PASSWORD_ENV).unwrap_or_else(|_| "admin123".to_string()),
        }
    }

    pub fn with_password(password: impl Into<String>) -> Self {
        PasswordAuthorizer {
            password: password.into(),
        }
    }

    /// Check a submitted password and mint a session on success.
    pub fn verify(&self, submitted: &str) -> Option<AdminSession> {
        if submitted == self.password {
            Some(AdminSession::started_now())
        } else {
            None
        }
    }
}

/// An authenticated admin session with an expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSession {
    pub authenticated: bool,
    /// Expiry instant, milliseconds since the Unix epoch.
    pub expires_at: i64,
}

impl AdminSession {
    pub fn started_now() -> Self {
        AdminSession {
            authenticated: true,
            expires_at: Utc::now().timestamp_millis() + SESSION_DURATION_MS,
        }
    }

    /// An unauthenticated placeholder session.
    pub fn anonymous() -> Self {
        AdminSession {
            authenticated: false,
            expires_at: 0,
        }
    }
}

impl Authorizer for AdminSession {
    fn is_authorized(&self) -> bool {
        self.authenticated && Utc::now().timestamp_millis() < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_password_mints_session() {
        let auth = PasswordAuthorizer::with_password("hunter2");
        let session = auth.verify("hunter2").unwrap();
        assert!(session.is_authorized());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let auth = PasswordAuthorizer::with_password("hunter2");
        assert!(auth.verify("letmein").is_none());
    }

    #[test]
    fn test_expired_session_not_authorized() {
        let stale = AdminSession {
            authenticated: true,
            expires_at: Utc::now().timestamp_millis() - 1,
        };
        assert!(!stale.is_authorized());
    }

    #[test]
    fn test_anonymous_never_authorized() {
        assert!(!AdminSession::anonymous().is_authorized());
    }
}
