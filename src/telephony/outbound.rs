use super::error::OutboundCallError;

/// Path the provider calls back on for every turn
pub const VOICE_WEBHOOK_PATH: &str = "/voice";

/// A validated request to originate a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundCall {
    pub to: String,
    pub from: String,
    /// Absolute URL of the turn webhook
    pub webhook_url: String,
}

/// Numbers and callback URL used when placing calls
#[derive(Debug, Clone, Default)]
pub struct OutboundSettings {
    pub base_url: String,
    pub from_number: Option<String>,
    pub default_to_number: Option<String>,
}

impl OutboundSettings {
    /// Build the call for `to`, falling back to the configured default destination
    pub fn plan(&self, to: Option<&str>) -> Result<OutboundCall, OutboundCallError> {
        if !self.base_url.starts_with("http") {
            return Err(OutboundCallError::configuration(
                "BASE_URL is not set properly",
            ));
        }

        let to = non_empty(to).or_else(|| non_empty(self.default_to_number.as_deref()));
        let from = non_empty(self.from_number.as_deref());

        let (Some(to), Some(from)) = (to, from) else {
            return Err(OutboundCallError::configuration(
                "Phone numbers not configured",
            ));
        };

        Ok(OutboundCall {
            to: to.to_string(),
            from: from.to_string(),
            webhook_url: format!(
                "{}{}",
                self.base_url.trim_end_matches('/'),
                VOICE_WEBHOOK_PATH
            ),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
