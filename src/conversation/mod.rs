//! The intake conversation state machine
//!
//! Each turn is an independent webhook request. `transition` is the pure
//! step function over `(session, input)`; `TurnEngine` wraps it with the
//! session store and the record sink:
//!
//! ```text
//! Name -> Email -> Age -> Location -> Introduction -> (record saved, hang up)
//! ```
//!
//! Empty input at any step repeats that step's question.

mod decision;
mod engine;
mod event;
pub mod prompts;
mod transition;

#[cfg(test)]
mod proptests;

pub use decision::{Announcement, GatherConfig, TurnDecision, VoiceConfig};
pub use engine::TurnEngine;
pub use event::TurnEvent;
pub use transition::{transition, Transition, TurnError};
