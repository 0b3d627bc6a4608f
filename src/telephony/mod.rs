//! Outbound calls through the telephony provider
//!
//! Inbound turns arrive on the `/voice` webhook; this module only covers the
//! other direction, asking the provider to dial a number and point the new
//! call at that same webhook.

mod client;
mod error;
mod outbound;

pub use client::{CallOriginator, TwilioClient, TwilioCredentials};
pub use error::OutboundCallError;
pub use outbound::{OutboundCall, OutboundSettings, VOICE_WEBHOOK_PATH};
