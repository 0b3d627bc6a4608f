use super::decision::TurnDecision;
use super::event::TurnEvent;
use super::prompts;
use super::transition::{transition, Transition};
use crate::records::RecordSink;
use crate::session::{CallSession, SessionStore};
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Drives the intake conversation for every live call
pub struct TurnEngine {
    sessions: Arc<SessionStore>,
    sink: Arc<dyn RecordSink>,
}

impl TurnEngine {
    pub fn new(sessions: Arc<SessionStore>, sink: Arc<dyn RecordSink>) -> Self {
        Self { sessions, sink }
    }

    /// Process one turn and decide what the call hears next
    ///
    /// Always returns a decision: storage failures are logged and the caller
    /// still gets the closing announcement.
    pub async fn handle_turn(&self, event: TurnEvent) -> TurnDecision {
        if event.call_id.is_empty() {
            warn!("Turn received without a call id");
            return prompts::error_decision();
        }

        let mut session = self.sessions.get_or_create(&event.call_id).await;
        if session.caller.is_none() {
            session.caller = event.caller.clone();
        }

        let step = session.step;
        match transition(&session, event.input(), Utc::now()) {
            Ok(Transition::Reprompt(decision)) => {
                info!("Call {}: no input for {}, asking again", event.call_id, step);
                self.save(session).await;
                decision
            }
            Ok(Transition::Advance { session, decision }) => {
                info!(
                    "Call {}: captured {}, moving to {}",
                    event.call_id, step, session.step
                );
                self.save(session).await;
                decision
            }
            Ok(Transition::Complete { record, decision }) => {
                info!("Call {}: intake complete for {}", event.call_id, record.name);
                if let Err(e) = self.sink.append(record).await {
                    error!("Failed to save record for call {}: {}", event.call_id, e);
                }
                self.sessions.remove(&event.call_id).await;
                decision
            }
            Err(e) => {
                // Session left in place for inspection
                error!("Call {}: {}", event.call_id, e);
                prompts::error_decision()
            }
        }
    }

    async fn save(&self, session: CallSession) {
        let call_id = session.call_id.clone();
        if !self.sessions.save(session).await {
            warn!("Call {}: session evicted mid-turn, next turn starts over", call_id);
        }
    }
}
