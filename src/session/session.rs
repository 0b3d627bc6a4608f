use super::step::Step;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side state for one in-progress call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSession {
    /// Call identifier supplied by the telephony provider (e.g. "CA1...")
    pub call_id: String,

    /// The question currently waiting for an answer
    pub step: Step,

    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub location: Option<String>,
    pub introduction: Option<String>,

    /// Originating address, as first reported by the provider
    pub caller: Option<String>,

    /// Reserved for a future retry limit; never read by the turn logic
    pub retry_count: u32,

    /// When a turn for this call was last processed
    pub last_activity: DateTime<Utc>,
}

impl CallSession {
    /// Fresh conversation waiting for the caller's name
    pub fn new(call_id: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            step: Step::Name,
            name: None,
            email: None,
            age: None,
            location: None,
            introduction: None,
            caller: None,
            retry_count: 0,
            last_activity: Utc::now(),
        }
    }

    /// The answer stored for `step`, if any
    pub fn answer(&self, step: Step) -> Option<&str> {
        match step {
            Step::Name => self.name.as_deref(),
            Step::Email => self.email.as_deref(),
            Step::Age => self.age.as_deref(),
            Step::Location => self.location.as_deref(),
            Step::Introduction => self.introduction.as_deref(),
        }
    }

    /// Store `value` as the answer for `step`, unmodified
    pub fn set_answer(&mut self, step: Step, value: impl Into<String>) {
        let slot = match step {
            Step::Name => &mut self.name,
            Step::Email => &mut self.email,
            Step::Age => &mut self.age,
            Step::Location => &mut self.location,
            Step::Introduction => &mut self.introduction,
        };
        *slot = Some(value.into());
    }
}
