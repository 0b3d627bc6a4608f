use super::error::OutboundCallError;
use super::outbound::OutboundCall;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

/// Something that can place a phone call through the provider
#[async_trait::async_trait]
pub trait CallOriginator: Send + Sync {
    /// Originate `call`, returning the provider's call id
    async fn originate(&self, call: &OutboundCall) -> Result<String, OutboundCallError>;
}

/// Twilio account credentials
#[derive(Debug, Clone, Default)]
pub struct TwilioCredentials {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
}

/// Originates calls through the Twilio REST API
pub struct TwilioClient {
    client: Client,
    api_base: String,
    credentials: TwilioCredentials,
}

#[derive(Debug, Deserialize)]
struct CreateCallResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioErrorResponse {
    message: String,
}

impl TwilioClient {
    pub fn new(api_base: impl Into<String>, credentials: TwilioCredentials) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            credentials,
        })
    }
}

#[async_trait::async_trait]
impl CallOriginator for TwilioClient {
    async fn originate(&self, call: &OutboundCall) -> Result<String, OutboundCallError> {
        let (Some(sid), Some(token)) = (
            self.credentials.account_sid.as_deref(),
            self.credentials.auth_token.as_deref(),
        ) else {
            return Err(OutboundCallError::transport(
                "Telephony account credentials are not configured",
            ));
        };

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Calls.json",
            self.api_base.trim_end_matches('/'),
            sid
        );

        info!("Placing call to {} from {}", call.to, call.from);

        let response = self
            .client
            .post(&url)
            .basic_auth(sid, Some(token))
            .form(&[
                ("To", call.to.as_str()),
                ("From", call.from.as_str()),
                ("Url", call.webhook_url.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Call request failed: {}", e);
                OutboundCallError::transport(format!("Request failed: {e}"))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OutboundCallError::transport(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<TwilioErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("HTTP {status}: {body}"));
            error!("Provider rejected call to {}: {}", call.to, message);
            return Err(OutboundCallError::transport(message));
        }

        let created: CreateCallResponse = serde_json::from_str(&body).map_err(|e| {
            OutboundCallError::transport(format!("Failed to parse response: {e}"))
        })?;

        info!("Call {} placed to {}", created.sid, call.to);

        Ok(created.sid)
    }
}
