use super::decision::{Announcement, TurnDecision};
use crate::session::{CallSession, Step};

pub const ERROR_MESSAGE: &str = "Unexpected error. Please call again.";

/// Seconds of silence between the hold message and the follow-up
pub const HOLD_PAUSE_SECS: u32 = 2;

/// The question for `step`, used on the first ask and whenever nothing was heard
pub fn question(step: Step) -> &'static str {
    match step {
        Step::Name => "Hello! Please say your full name after the beep.",
        Step::Email => "Please say your email address slowly and clearly.",
        Step::Age => "Please say your age clearly.",
        Step::Location => "Please say your current location.",
        Step::Introduction => "Please give your introduction again.",
    }
}

/// Prompt spoken when the conversation moves on to `step`
///
/// Acknowledges the previous answer where it reads naturally.
pub fn advance_prompt(step: Step, session: &CallSession) -> String {
    match step {
        Step::Name => question(Step::Name).to_string(),
        Step::Email => format!(
            "Thank you {}. Now please tell your email address clearly.",
            session.name.as_deref().unwrap_or_default()
        ),
        Step::Age => "Great! Now please tell me your age clearly.".to_string(),
        Step::Location => {
            "Perfect! Now please say your city and state or country clearly.".to_string()
        }
        Step::Introduction => "Finally, give a short introduction about yourself.".to_string(),
    }
}

/// Confirmation, hold message, pause, busy-agent follow-up
pub fn closing(name: &str) -> Vec<Announcement> {
    vec![
        Announcement::say(format!(
            "Excellent! Thank you {}. Your info is recorded.",
            name
        )),
        Announcement::say("Please stay on the line while we connect you to a human agent."),
        Announcement::pause(HOLD_PAUSE_SECS),
        Announcement::say(
            "Now all agents are currently busy. They will follow up with you in 24 hours.",
        ),
    ]
}

/// Generic failure message; no detail is spoken to the caller
pub fn error_decision() -> TurnDecision {
    TurnDecision::hangup(vec![Announcement::say(ERROR_MESSAGE)])
}
