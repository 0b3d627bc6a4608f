use super::state::AppState;
use crate::conversation::{prompts, TurnEvent};
use crate::records::CallRecord;
use crate::telephony::OutboundCallError;
use crate::twiml;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    Form,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Form fields the provider posts on every turn
#[derive(Debug, Default, Deserialize)]
pub struct VoiceWebhook {
    #[serde(rename = "CallSid", default)]
    pub call_sid: String,

    /// Caller's phone number
    #[serde(rename = "From")]
    pub from: Option<String>,

    /// Transcript of what the caller said
    #[serde(rename = "SpeechResult")]
    pub speech_result: Option<String>,

    /// Keys pressed on the keypad
    #[serde(rename = "Digits")]
    pub digits: Option<String>,
}

impl From<VoiceWebhook> for TurnEvent {
    fn from(hook: VoiceWebhook) -> Self {
        TurnEvent {
            call_id: hook.call_sid,
            caller: hook.from,
            speech: hook.speech_result,
            digits: hook.digits,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CallMeRequest {
    /// Number to dial (defaults to the configured test number)
    pub to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMeResponse {
    pub success: bool,
    pub call_sid: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsResponse {
    pub success: bool,
    pub total_calls: usize,
    pub calls: Vec<CallRecord>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /voice
/// Process one conversation turn and reply with TwiML
///
/// A body that isn't a readable form still gets a spoken error, never a
/// plain-text rejection.
pub async fn voice(
    State(state): State<AppState>,
    hook: Option<Form<VoiceWebhook>>,
) -> impl IntoResponse {
    let decision = match hook {
        Some(Form(hook)) => state.engine.handle_turn(hook.into()).await,
        None => {
            warn!("Unreadable voice webhook body");
            prompts::error_decision()
        }
    };
    (
        [(header::CONTENT_TYPE, twiml::CONTENT_TYPE)],
        twiml::render(&decision),
    )
}

/// GET /logs
/// All completed call records
pub async fn list_logs(State(state): State<AppState>) -> impl IntoResponse {
    let calls = state.records.list().await;
    Json(LogsResponse {
        success: true,
        total_calls: calls.len(),
        calls,
        timestamp: Utc::now(),
    })
}

/// POST /call-me
/// Ask the provider to dial a number and run the intake conversation
pub async fn call_me(
    State(state): State<AppState>,
    body: Option<Form<CallMeRequest>>,
) -> impl IntoResponse {
    let req = body.map(|Form(req)| req).unwrap_or_default();

    let call = match state.outbound.plan(req.to.as_deref()) {
        Ok(call) => call,
        Err(e) => {
            error!("Outbound call not configured: {}", e);
            return error_response(e);
        }
    };

    match state.originator.originate(&call).await {
        Ok(call_sid) => {
            info!("Outbound call {} started", call_sid);
            (
                StatusCode::OK,
                Json(CallMeResponse {
                    success: true,
                    call_sid,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to place call to {}: {}", call.to, e);
            error_response(e)
        }
    }
}

fn error_response(e: OutboundCallError) -> axum::response::Response {
    let (status, success) = match &e {
        OutboundCallError::Configuration(_) => (StatusCode::BAD_REQUEST, None),
        OutboundCallError::Transport(_) => (StatusCode::INTERNAL_SERVER_ERROR, Some(false)),
    };
    (
        status,
        Json(ErrorResponse {
            success,
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// GET /test
/// Liveness probe for the dashboard
pub async fn test() -> impl IntoResponse {
    Json(TestResponse {
        message: "Server is working!".to_string(),
        timestamp: Utc::now(),
    })
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
