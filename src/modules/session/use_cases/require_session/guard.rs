use crate::modules::session::core::gate::SessionGate;
use crate::shared::infrastructure::session_store::SessionStore;
use std::sync::Arc;
use tracing::debug;

/// Decides whether a request token may reach the delivery routes.
pub struct SessionGuard {
    gate: SessionGate,
    sessions: Arc<dyn SessionStore>,
}

impl SessionGuard {
    pub fn new(gate: SessionGate, sessions: Arc<dyn SessionStore>) -> Self {
        Self { gate, sessions }
    }

    pub fn is_enabled(&self) -> bool {
        self.gate.is_enabled()
    }

    /// Always true while the gate is disabled. An expired session is removed when seen.
    pub async fn verify(&self, token: Option<&str>, now: i64) -> bool {
        if !self.gate.is_enabled() {
            return true;
        }
        let Some(token) = token else {
            return false;
        };
        let Some(session) = self.sessions.get(token).await else {
            return false;
        };
        if self.gate.admits(&session, now) {
            return true;
        }
        debug!("clearing expired session");
        self.sessions.remove(token).await;
        false
    }
}

#[cfg(test)]
mod session_guard_tests {
    use super::*;
    use crate::modules::session::core::gate::Session;
    use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
    use chrono::TimeDelta;
    use rstest::rstest;

    const NOW: i64 = 1_700_000_000_000;

    async fn guarded() -> (Arc<InMemorySessionStore>, SessionGuard) {
        let sessions = Arc::new(InMemorySessionStore::new());
        sessions
            .put(
                "token-1",
                Session {
                    authenticated: true,
                    logged_in_at: NOW,
                },
            )
            .await;
        let gate = SessionGate::new(Some("open-sesame".into()), TimeDelta::seconds(60));
        (sessions.clone(), SessionGuard::new(gate, sessions))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_admit_a_live_session() {
        let (_, guard) = guarded().await;
        assert!(guard.verify(Some("token-1"), NOW + 59_999).await);
    }

    #[rstest]
    #[case(None)]
    #[case(Some("unknown"))]
    #[tokio::test]
    async fn it_should_refuse_missing_or_unknown_tokens(#[case] token: Option<&str>) {
        let (_, guard) = guarded().await;
        assert!(!guard.verify(token, NOW).await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clear_an_expired_session() {
        let (sessions, guard) = guarded().await;
        assert!(!guard.verify(Some("token-1"), NOW + 60_000).await);
        assert_eq!(sessions.get("token-1").await, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_everything_through_when_disabled() {
        let guard = SessionGuard::new(
            SessionGate::disabled(),
            Arc::new(InMemorySessionStore::new()),
        );
        assert!(!guard.is_enabled());
        assert!(guard.verify(None, NOW).await);
    }
}
