use crate::modules::session::core::gate::Session;
use crate::shared::infrastructure::session_store::SessionStore;
use chrono::TimeDelta;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, token: &str, session: Session) {
        self.sessions
            .write()
            .await
            .insert(token.to_string(), session);
    }

    async fn get(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    async fn remove(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    async fn remove_expired(&self, now: i64, ttl: TimeDelta) {
        self.sessions
            .write()
            .await
            .retain(|_, session| session.is_valid(now, ttl));
    }
}
