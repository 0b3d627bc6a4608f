use super::session::CallSession;
use chrono::Utc;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Active conversations keyed by call id
///
/// Built once per process and shared with the turn engine. Structural
/// changes (insert, remove, eviction) take the write lock; each call's
/// turns arrive one at a time, so sessions never race with themselves.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, CallSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for `call_id`, starting a new conversation if none exists
    pub async fn get_or_create(&self, call_id: &str) -> CallSession {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(call_id) {
                return session.clone();
            }
        }

        // Re-check under the write lock: an overlapping request may have
        // inserted the session since the read lock was dropped.
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(call_id.to_string())
            .or_insert_with(|| {
                info!("Starting conversation for call {}", call_id);
                CallSession::new(call_id)
            })
            .clone()
    }

    /// Current state for `call_id` without creating one
    pub async fn get(&self, call_id: &str) -> Option<CallSession> {
        let sessions = self.sessions.read().await;
        sessions.get(call_id).cloned()
    }

    /// Write back the state produced by a turn
    ///
    /// Returns false without storing anything if the session was removed or
    /// evicted after it was read; an evicted call starts over on its next turn.
    pub async fn save(&self, mut session: CallSession) -> bool {
        session.last_activity = Utc::now();
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session.call_id) {
            Some(slot) => {
                *slot = session;
                true
            }
            None => {
                debug!("Session for call {} is gone, not saving", session.call_id);
                false
            }
        }
    }

    /// Drop the conversation for `call_id`. Returns false if there was none.
    pub async fn remove(&self, call_id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(call_id).is_some();
        if removed {
            debug!("Removed session for call {}", call_id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Remove sessions with no turn in the last `ttl`, returning their call ids
    pub async fn evict_idle(&self, ttl: Duration) -> Vec<String> {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        let cutoff = Utc::now()
            .checked_sub_signed(ttl)
            .unwrap_or(chrono::DateTime::<Utc>::MIN_UTC);

        let mut sessions = self.sessions.write().await;
        let expired: Vec<String> = sessions
            .values()
            .filter(|s| s.last_activity <= cutoff)
            .map(|s| s.call_id.clone())
            .collect();

        for call_id in &expired {
            sessions.remove(call_id);
        }

        expired
    }
}
