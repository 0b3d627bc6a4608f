use crate::conversation::TurnEngine;
use crate::records::RecordSink;
use crate::telephony::{CallOriginator, OutboundSettings};
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Conversation driver for the `/voice` webhook
    pub engine: Arc<TurnEngine>,

    /// Completed call records, for `/logs`
    pub records: Arc<dyn RecordSink>,

    /// Places calls for `/call-me`
    pub originator: Arc<dyn CallOriginator>,

    pub outbound: Arc<OutboundSettings>,

    /// Directory holding `dashboard.html`, `about.html` and other assets
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(
        engine: Arc<TurnEngine>,
        records: Arc<dyn RecordSink>,
        originator: Arc<dyn CallOriginator>,
        outbound: OutboundSettings,
        public_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            engine,
            records,
            originator,
            outbound: Arc::new(outbound),
            public_dir: public_dir.into(),
        }
    }
}
