//! Per-call conversation state
//!
//! - `Step`: the fixed, ordered list of intake questions
//! - `CallSession`: answers collected so far for one live call
//! - `SessionStore`: process-wide map from call id to session
//! - `spawn_idle_sweeper`: background eviction of abandoned calls

mod session;
mod step;
mod store;
mod sweeper;

pub use session::CallSession;
pub use step::Step;
pub use store::SessionStore;
pub use sweeper::spawn_idle_sweeper;
