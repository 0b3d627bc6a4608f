//! HTTP API for the telephony provider and the dashboard
//!
//! - POST /voice - Conversation turn webhook (form-encoded in, TwiML out)
//! - POST /call-me - Place an outbound call into the intake flow
//! - GET /logs - All completed call records
//! - GET /test, GET /health - Liveness checks
//! - GET /, GET /about - Dashboard pages; other static assets from the public dir

mod handlers;
mod routes;
mod state;

pub use handlers::{CallMeResponse, ErrorResponse, LogsResponse, TestResponse};
pub use routes::create_router;
pub use state::AppState;
