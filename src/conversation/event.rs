/// One turn delivered by the call transport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnEvent {
    pub call_id: String,

    /// Originating address of the caller
    pub caller: Option<String>,

    /// Speech transcript, if the caller spoke
    pub speech: Option<String>,

    /// Keypad digits, if the caller typed
    pub digits: Option<String>,
}

impl TurnEvent {
    pub fn new(call_id: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            ..Default::default()
        }
    }

    pub fn with_caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    pub fn with_speech(mut self, speech: impl Into<String>) -> Self {
        self.speech = Some(speech.into());
        self
    }

    pub fn with_digits(mut self, digits: impl Into<String>) -> Self {
        self.digits = Some(digits.into());
        self
    }

    /// The caller's answer: speech if any was recognized, otherwise digits
    pub fn input(&self) -> Option<&str> {
        self.speech
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.digits.as_deref().filter(|d| !d.is_empty()))
    }
}
