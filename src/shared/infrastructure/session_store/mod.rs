use crate::modules::session::core::gate::Session;
use async_trait::async_trait;
use chrono::TimeDelta;

/// Keeps issued login sessions by token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, token: &str, session: Session);
    async fn get(&self, token: &str) -> Option<Session>;
    async fn remove(&self, token: &str);
    /// Drops every session no longer valid at `now`.
    async fn remove_expired(&self, now: i64, ttl: TimeDelta);
}

pub mod in_memory;
