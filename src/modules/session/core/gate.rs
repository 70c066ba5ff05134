// Shared-secret login gate.
//
// Notes
// - A plain string comparison against one configured secret. No hashing, no rate limiting,
//   no user accounts. It keeps casual visitors out of the reports and nothing more.
// - A session is valid for a fixed window from login time and is not extended by use.

use chrono::TimeDelta;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub authenticated: bool,
    /// Epoch milliseconds.
    pub logged_in_at: i64,
}

impl Session {
    pub fn expires_at(&self, ttl: TimeDelta) -> i64 {
        self.logged_in_at.saturating_add(ttl.num_milliseconds())
    }

    pub fn is_valid(&self, now: i64, ttl: TimeDelta) -> bool {
        self.authenticated && now < self.expires_at(ttl)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("incorrect password")]
    IncorrectPassword,

    #[error("login gate is disabled")]
    Disabled,
}

#[derive(Debug, Clone)]
pub struct SessionGate {
    secret: Option<String>,
    ttl: TimeDelta,
}

impl SessionGate {
    pub fn new(secret: Option<String>, ttl: TimeDelta) -> Self {
        Self { secret, ttl }
    }

    pub fn disabled() -> Self {
        Self::new(None, TimeDelta::zero())
    }

    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    pub fn login(&self, password: &str, now: i64) -> Result<Session, LoginError> {
        let secret = self.secret.as_deref().ok_or(LoginError::Disabled)?;
        if password != secret {
            return Err(LoginError::IncorrectPassword);
        }
        Ok(Session {
            authenticated: true,
            logged_in_at: now,
        })
    }

    pub fn admits(&self, session: &Session, now: i64) -> bool {
        session.is_valid(now, self.ttl)
    }
}
