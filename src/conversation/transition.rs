use super::decision::TurnDecision;
use super::prompts;
use crate::records::CallRecord;
use crate::session::{CallSession, Step};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Outcome of applying one caller answer to a session
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Nothing was captured; ask the same question again
    Reprompt(TurnDecision),

    /// Answer stored; the session now waits on the next question
    Advance {
        session: CallSession,
        decision: TurnDecision,
    },

    /// Final answer stored; the conversation is over
    Complete {
        record: CallRecord,
        decision: TurnDecision,
    },
}

impl Transition {
    pub fn decision(&self) -> &TurnDecision {
        match self {
            Transition::Reprompt(decision) => decision,
            Transition::Advance { decision, .. } => decision,
            Transition::Complete { decision, .. } => decision,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The session reached the last question with an earlier answer missing
    #[error("call {call_id} reached the final step without an answer for {missing}")]
    IncompleteSession { call_id: String, missing: Step },
}

/// Apply `input` to `session` without touching any shared state
///
/// Empty or absent input leaves the session as it is and repeats the current
/// question. Anything else is stored verbatim under the current step.
pub fn transition(
    session: &CallSession,
    input: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Transition, TurnError> {
    let Some(answer) = input.filter(|i| !i.is_empty()) else {
        return Ok(Transition::Reprompt(TurnDecision::gather(prompts::question(
            session.step,
        ))));
    };

    let mut next = session.clone();
    next.set_answer(session.step, answer);

    match session.step.next() {
        Some(step) => {
            next.step = step;
            let decision = TurnDecision::gather(prompts::advance_prompt(step, &next));
            Ok(Transition::Advance {
                session: next,
                decision,
            })
        }
        None => {
            let record = assemble_record(&next, now)?;
            let decision = TurnDecision::hangup(prompts::closing(&record.name));
            Ok(Transition::Complete { record, decision })
        }
    }
}

fn assemble_record(session: &CallSession, now: DateTime<Utc>) -> Result<CallRecord, TurnError> {
    let answer = |step: Step| {
        session
            .answer(step)
            .map(str::to_string)
            .ok_or_else(|| TurnError::IncompleteSession {
                call_id: session.call_id.clone(),
                missing: step,
            })
    };

    Ok(CallRecord {
        from: session.caller.clone(),
        name: answer(Step::Name)?,
        email: answer(Step::Email)?,
        age: answer(Step::Age)?,
        location: answer(Step::Location)?,
        introduction: answer(Step::Introduction)?,
        time: now,
        call_sid: session.call_id.clone(),
    })
}
