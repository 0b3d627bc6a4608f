//! Property-based tests for the turn state machine
//!
//! The decision depends only on the current step and whether input was
//! captured, which makes these invariants easy to check exhaustively.

use super::decision::TurnDecision;
use super::prompts;
use super::transition::{transition, Transition};
use crate::session::{CallSession, Step};
use chrono::Utc;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Name),
        Just(Step::Email),
        Just(Step::Age),
        Just(Step::Location),
        Just(Step::Introduction),
    ]
}

fn arb_non_final_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Name),
        Just(Step::Email),
        Just(Step::Age),
        Just(Step::Location),
    ]
}

/// Any non-empty answer, including padding and non-ASCII text
fn arb_answer() -> impl Strategy<Value = String> {
    "\\PC{1,40}"
}

/// A session at `step` with every earlier question answered
fn arb_session_at(step: Step) -> impl Strategy<Value = CallSession> {
    proptest::collection::vec(arb_answer(), 5).prop_map(move |answers| {
        let mut session = CallSession::new("CA-prop");
        for (s, answer) in Step::ALL.iter().zip(answers) {
            if *s == step {
                break;
            }
            session.set_answer(*s, answer);
        }
        session.step = step;
        session
    })
}

fn arb_session() -> impl Strategy<Value = CallSession> {
    arb_step().prop_flat_map(arb_session_at)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn empty_input_repeats_question(session in arb_session(), empty in prop_oneof![Just(None), Just(Some(""))]) {
        let result = transition(&session, empty, Utc::now()).unwrap();

        match result {
            Transition::Reprompt(TurnDecision::Gather { prompt, .. }) => {
                prop_assert_eq!(prompt, prompts::question(session.step));
            }
            other => prop_assert!(false, "expected reprompt, got {:?}", other),
        }
    }

    #[test]
    fn answer_is_stored_verbatim_and_step_advances(
        session in arb_non_final_step().prop_flat_map(arb_session_at),
        answer in arb_answer(),
    ) {
        let result = transition(&session, Some(&answer), Utc::now()).unwrap();

        match result {
            Transition::Advance { session: next, decision } => {
                prop_assert_eq!(next.answer(session.step), Some(answer.as_str()));
                prop_assert_eq!(Some(next.step), session.step.next());
                prop_assert!(decision.expects_input());
                // Earlier answers are untouched
                for step in Step::ALL.iter().filter(|s| **s != session.step) {
                    prop_assert_eq!(next.answer(*step), session.answer(*step));
                }
            }
            other => prop_assert!(false, "expected advance, got {:?}", other),
        }
    }

    #[test]
    fn final_answer_completes_with_every_field(
        session in arb_session_at(Step::Introduction),
        answer in arb_answer(),
    ) {
        let now = Utc::now();
        let result = transition(&session, Some(&answer), now).unwrap();

        match result {
            Transition::Complete { record, decision } => {
                prop_assert_eq!(record.name.as_str(), session.answer(Step::Name).unwrap());
                prop_assert_eq!(record.email.as_str(), session.answer(Step::Email).unwrap());
                prop_assert_eq!(record.age.as_str(), session.answer(Step::Age).unwrap());
                prop_assert_eq!(record.location.as_str(), session.answer(Step::Location).unwrap());
                prop_assert_eq!(record.introduction, answer);
                prop_assert_eq!(record.time, now);
                prop_assert_eq!(record.call_sid, session.call_id);
                prop_assert!(!decision.expects_input());
            }
            other => prop_assert!(false, "expected completion, got {:?}", other),
        }
    }

    #[test]
    fn decision_depends_only_on_step_and_presence(
        step in arb_non_final_step(),
        a in arb_session_at(Step::Name),
        b in arb_session_at(Step::Name),
    ) {
        // Two unrelated sessions parked on the same step reprompt identically
        let mut a = a;
        let mut b = b;
        a.step = step;
        b.step = step;
        let da = transition(&a, None, Utc::now()).unwrap();
        let db = transition(&b, None, Utc::now()).unwrap();
        prop_assert_eq!(da.decision(), db.decision());
    }
}
