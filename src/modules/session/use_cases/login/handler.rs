use crate::modules::session::core::gate::{LoginError, SessionGate};
use crate::shared::infrastructure::session_store::SessionStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedSession {
    pub token: String,
    /// Epoch milliseconds.
    pub expires_at: i64,
}

pub struct LoginHandler {
    gate: SessionGate,
    sessions: Arc<dyn SessionStore>,
}

impl LoginHandler {
    pub fn new(gate: SessionGate, sessions: Arc<dyn SessionStore>) -> Self {
        Self { gate, sessions }
    }

    pub async fn handle(&self, password: &str, now: i64) -> Result<IssuedSession, LoginError> {
        let session = self.gate.login(password, now).inspect_err(|error| {
            warn!(%error, "login refused");
        })?;
        self.sessions.remove_expired(now, self.gate.ttl()).await;
        let token = Uuid::new_v4().to_string();
        let expires_at = session.expires_at(self.gate.ttl());
        self.sessions.put(&token, session).await;
        info!(expires_at, "session opened");
        Ok(IssuedSession { token, expires_at })
    }
}
