use thiserror::Error;

/// Why an outbound call could not be placed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutboundCallError {
    /// Numbers or callback URL missing or malformed; the request can't succeed as configured
    #[error("{0}")]
    Configuration(String),

    /// The provider rejected the call or could not be reached
    #[error("{0}")]
    Transport(String),
}

impl OutboundCallError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
