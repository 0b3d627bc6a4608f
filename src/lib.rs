pub mod config;
pub mod conversation;
pub mod http;
pub mod records;
pub mod session;
pub mod telephony;
pub mod twiml;

pub use config::Config;
pub use conversation::{Announcement, GatherConfig, TurnDecision, TurnEngine, TurnEvent};
pub use http::{create_router, AppState};
pub use records::{CallRecord, RecordLog, RecordSink};
pub use session::{spawn_idle_sweeper, CallSession, SessionStore, Step};
pub use telephony::{CallOriginator, OutboundCallError, OutboundSettings, TwilioClient};
