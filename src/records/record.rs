use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The answers from one completed intake call
///
/// Field names match the on-disk log and the `/logs` payload consumed by the
/// dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Originating address of the caller
    #[serde(default)]
    pub from: Option<String>,

    pub name: String,
    pub email: String,
    pub age: String,
    pub location: String,
    pub introduction: String,

    /// When the final answer was captured
    pub time: DateTime<Utc>,

    #[serde(rename = "callSid")]
    pub call_sid: String,
}
