// Integration tests for the intake conversation
//
// These tests drive the turn engine the way the provider does, one webhook
// turn at a time, and check what ends up in the session store and the
// record log.

use anyhow::Result;
use call_intake::conversation::prompts;
use call_intake::{
    RecordLog, RecordSink, SessionStore, Step, TurnDecision, TurnEngine, TurnEvent,
};
use std::sync::Arc;
use tempfile::TempDir;

struct Harness {
    _dir: TempDir,
    sessions: Arc<SessionStore>,
    records: Arc<RecordLog>,
    engine: TurnEngine,
}

async fn harness() -> Result<Harness> {
    let dir = TempDir::new()?;
    let records = Arc::new(RecordLog::open(dir.path().join("logs.json")).await);
    let sessions = Arc::new(SessionStore::new());
    let engine = TurnEngine::new(Arc::clone(&sessions), records.clone());

    Ok(Harness {
        _dir: dir,
        sessions,
        records,
        engine,
    })
}

fn prompt_of(decision: &TurnDecision) -> &str {
    match decision {
        TurnDecision::Gather { prompt, .. } => prompt,
        other => panic!("expected a gather, got {:?}", other),
    }
}

#[tokio::test]
async fn test_full_conversation_scenario() -> Result<()> {
    let h = harness().await?;

    // Turn 1: call starts, nothing said yet
    let d = h
        .engine
        .handle_turn(TurnEvent::new("CA1").with_caller("+15550100"))
        .await;
    assert_eq!(prompt_of(&d), "Hello! Please say your full name after the beep.");

    // Turn 2: name
    let d = h
        .engine
        .handle_turn(TurnEvent::new("CA1").with_caller("+15550100").with_speech("Alice"))
        .await;
    assert!(prompt_of(&d).contains("email"));
    let session = h.sessions.get("CA1").await.unwrap();
    assert_eq!(session.name.as_deref(), Some("Alice"));
    assert_eq!(session.step, Step::Email);

    // Turns 3-5
    let d = h
        .engine
        .handle_turn(TurnEvent::new("CA1").with_speech("alice@x.com"))
        .await;
    assert!(prompt_of(&d).contains("age"));

    let d = h.engine.handle_turn(TurnEvent::new("CA1").with_digits("30")).await;
    assert!(prompt_of(&d).contains("city"));

    let d = h
        .engine
        .handle_turn(TurnEvent::new("CA1").with_speech("Earth"))
        .await;
    assert!(prompt_of(&d).contains("introduction"));

    // Turn 6: introduction ends the call
    let d = h
        .engine
        .handle_turn(TurnEvent::new("CA1").with_speech("Hi I'm Alice"))
        .await;
    assert_eq!(
        d,
        TurnDecision::hangup(prompts::closing("Alice")),
        "final turn should play the closing sequence"
    );

    let records = h.records.list().await;
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.call_sid, "CA1");
    assert_eq!(record.from.as_deref(), Some("+15550100"));
    assert_eq!(record.name, "Alice");
    assert_eq!(record.email, "alice@x.com");
    assert_eq!(record.age, "30");
    assert_eq!(record.location, "Earth");
    assert_eq!(record.introduction, "Hi I'm Alice");

    // Session is gone and a new turn starts over
    assert!(h.sessions.get("CA1").await.is_none());
    let fresh = h.sessions.get_or_create("CA1").await;
    assert_eq!(fresh.step, Step::Name);
    assert!(fresh.name.is_none());

    Ok(())
}

#[tokio::test]
async fn test_empty_input_reprompts_without_changes() -> Result<()> {
    let h = harness().await?;

    h.engine.handle_turn(TurnEvent::new("CA1")).await;
    h.engine
        .handle_turn(TurnEvent::new("CA1").with_speech("Alice"))
        .await;
    let before = h.sessions.get("CA1").await.unwrap();

    let d = h
        .engine
        .handle_turn(TurnEvent::new("CA1").with_speech("").with_digits(""))
        .await;

    assert_eq!(prompt_of(&d), prompts::question(Step::Email));
    let after = h.sessions.get("CA1").await.unwrap();
    assert_eq!(after.step, before.step);
    assert_eq!(after.name, before.name);
    assert_eq!(after.email, None);

    Ok(())
}

#[tokio::test]
async fn test_final_step_reprompts_on_silence() -> Result<()> {
    let h = harness().await?;

    for answer in ["", "Bob", "bob@x.com", "41", "Mars"] {
        h.engine
            .handle_turn(TurnEvent::new("CA2").with_speech(answer))
            .await;
    }

    let d = h.engine.handle_turn(TurnEvent::new("CA2")).await;

    assert_eq!(prompt_of(&d), "Please give your introduction again.");
    assert!(h.records.is_empty().await);
    assert_eq!(h.sessions.get("CA2").await.unwrap().step, Step::Introduction);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_calls_are_isolated() -> Result<()> {
    let h = harness().await?;
    let engine = Arc::new(h.engine);

    let tasks = (0..8).map(|i| {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move {
            let call_id = format!("CA{i}");
            let prefix = format!("caller{i}");
            engine
                .handle_turn(TurnEvent::new(&call_id).with_caller(&prefix))
                .await;
            for field in ["name", "email", "age", "location", "intro"] {
                engine
                    .handle_turn(TurnEvent::new(&call_id).with_speech(format!("{prefix}-{field}")))
                    .await;
                tokio::task::yield_now().await;
            }
        })
    });
    for result in futures::future::join_all(tasks).await {
        result?;
    }

    let records = h.records.list().await;
    assert_eq!(records.len(), 8);
    for record in &records {
        let prefix = record.from.as_deref().unwrap();
        assert_eq!(record.call_sid, format!("CA{}", &prefix["caller".len()..]));
        assert_eq!(record.name, format!("{prefix}-name"));
        assert_eq!(record.email, format!("{prefix}-email"));
        assert_eq!(record.age, format!("{prefix}-age"));
        assert_eq!(record.location, format!("{prefix}-location"));
        assert_eq!(record.introduction, format!("{prefix}-intro"));
    }
    assert!(h.sessions.is_empty().await);

    Ok(())
}
