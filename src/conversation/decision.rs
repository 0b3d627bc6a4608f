use crate::telephony::VOICE_WEBHOOK_PATH;

/// What the call should do after a turn
#[derive(Debug, Clone, PartialEq)]
pub enum TurnDecision {
    /// Speak `prompt`, then capture one more answer and post it back
    Gather { prompt: String, config: GatherConfig },

    /// Play the announcements in order, then end the call
    Hangup { announcements: Vec<Announcement> },
}

impl TurnDecision {
    pub fn gather(prompt: impl Into<String>) -> Self {
        TurnDecision::Gather {
            prompt: prompt.into(),
            config: GatherConfig::default(),
        }
    }

    pub fn hangup(announcements: Vec<Announcement>) -> Self {
        TurnDecision::Hangup { announcements }
    }

    /// Whether the call continues after this turn
    pub fn expects_input(&self) -> bool {
        matches!(self, TurnDecision::Gather { .. })
    }
}

/// One element of a closing sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Announcement {
    /// Speak with the provider's default voice
    Say { text: String },
    /// Silence for the given number of seconds
    Pause { seconds: u32 },
}

impl Announcement {
    pub fn say(text: impl Into<String>) -> Self {
        Announcement::Say { text: text.into() }
    }

    pub fn pause(seconds: u32) -> Self {
        Announcement::Pause { seconds }
    }
}

/// Input capture settings for the next turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatherConfig {
    /// Accepted input kinds, space separated ("speech dtmf")
    pub input: String,

    /// Seconds of silence before the provider gives up and posts no input
    pub timeout_secs: u32,

    /// End-of-speech detection ("auto" lets the provider decide)
    pub speech_timeout: String,

    pub speech_model: String,
    pub enhanced: bool,

    /// Recognition language
    pub language: String,

    /// Where the provider posts the captured answer
    pub action: String,
    pub method: String,

    pub voice: VoiceConfig,
}

impl Default for GatherConfig {
    fn default() -> Self {
        Self {
            input: "speech dtmf".to_string(),
            timeout_secs: 25,
            speech_timeout: "auto".to_string(),
            speech_model: "phone_call".to_string(),
            enhanced: true,
            language: "en-US".to_string(),
            action: VOICE_WEBHOOK_PATH.to_string(),
            method: "POST".to_string(),
            voice: VoiceConfig::default(),
        }
    }
}

/// Speech synthesis settings for prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceConfig {
    pub voice: String,
    pub language: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            voice: "Polly.Matthew".to_string(),
            language: "en-US".to_string(),
        }
    }
}
