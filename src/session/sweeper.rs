use super::store::SessionStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Periodically drop conversations whose caller stopped responding
///
/// A call that hangs up mid-question never reaches the closing step, so its
/// session would otherwise stay in the store for the life of the process.
pub fn spawn_idle_sweeper(
    store: Arc<SessionStore>,
    ttl: Duration,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Idle session sweeper started (ttl={}s, interval={}s)",
            ttl.as_secs(),
            interval.as_secs()
        );

        let mut ticker = tokio::time::interval(interval);
        // First tick fires immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let evicted = store.evict_idle(ttl).await;
            for call_id in &evicted {
                warn!("Evicted abandoned session for call {}", call_id);
            }
        }
    })
}
