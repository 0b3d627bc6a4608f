use serde::{Deserialize, Serialize};
use std::fmt;

/// A pending question in the intake conversation, in asking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Name,
    Email,
    Age,
    Location,
    Introduction,
}

impl Step {
    /// Every step, first to last
    pub const ALL: [Step; 5] = [
        Step::Name,
        Step::Email,
        Step::Age,
        Step::Location,
        Step::Introduction,
    ];

    /// The step asked after this one, or `None` once the conversation is done
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Name => Some(Step::Email),
            Step::Email => Some(Step::Age),
            Step::Age => Some(Step::Location),
            Step::Location => Some(Step::Introduction),
            Step::Introduction => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Name => "name",
            Step::Email => "email",
            Step::Age => "age",
            Step::Location => "location",
            Step::Introduction => "introduction",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
