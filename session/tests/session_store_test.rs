//! Integration tests for SessionStore: lazy creation, turn recording with
//! compaction, preference derivation, idle sweep, and clearing.

use chrono::{Duration, Utc};
use cbot_core::CbotError;
use session::{Mood, Role, SessionStore, MAX_CONTEXT, RECENT_TAIL};

#[tokio::test]
async fn test_get_or_create_is_idempotent() {
    let store = SessionStore::new();

    let first = store.get_or_create("u1").await.unwrap();
    let second = store.get_or_create("u1").await.unwrap();

    assert_eq!(first.user_id, second.user_id);
    assert_eq!(first.context, second.context);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_get_or_create_rejects_empty_user_id() {
    let store = SessionStore::new();

    let err = store.get_or_create("").await.unwrap_err();
    assert!(matches!(err, CbotError::InvalidArgument(_)));

    let err = store.get_or_create("   ").await.unwrap_err();
    assert!(matches!(err, CbotError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_record_turn_appends_user_then_assistant() {
    let store = SessionStore::new();

    store.record_turn("u1", "hello", "hi there").await.unwrap();

    let history = store.history_of("u1").await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[0].text, "hello");
    assert_eq!(history[1].role, Role::Assistant);
    assert_eq!(history[1].text, "hi there");
}

#[tokio::test]
async fn test_context_stays_bounded_after_compaction() {
    let store = SessionStore::new();

    for i in 0..8 {
        store
            .record_turn("u1", &format!("question {}", i), &format!("answer {}", i))
            .await
            .unwrap();
    }

    let history = store.history_of("u1").await.unwrap();
    assert!(history.len() <= MAX_CONTEXT);
    // nothing is marked important, so only the recent tail survives
    assert_eq!(history.len(), RECENT_TAIL);
    assert_eq!(history[0].text, "question 4");
    assert_eq!(history[7].text, "answer 7");
}

#[tokio::test]
async fn test_compaction_retains_important_turns() {
    let store = SessionStore::new();

    store
        .record_turn("u1", "project: apollo", "noted")
        .await
        .unwrap();
    for i in 0..6 {
        store
            .record_turn("u1", &format!("q{}", i), &format!("a{}", i))
            .await
            .unwrap();
    }

    let history = store.history_of("u1").await.unwrap();
    assert!(history.len() <= MAX_CONTEXT);
    assert!(
        history.iter().any(|t| t.text == "project: apollo"),
        "important turn should survive compaction"
    );
}

#[tokio::test]
async fn test_update_preferences_scenario() {
    let store = SessionStore::new();

    store
        .update_preferences("u1", "Tôi đang làm project: ABC 😊")
        .await
        .unwrap();

    let session = store.get_or_create("u1").await.unwrap();
    assert_eq!(session.preferences.mood, Mood::Happy);
    assert_eq!(
        session.important_info.get("project").map(String::as_str),
        Some("ABC")
    );
    assert!(session.preferences.topics.is_empty());
}

#[tokio::test]
async fn test_topics_accumulate_and_mood_is_overwritten() {
    let store = SessionStore::new();

    store
        .update_preferences("u1", "I write code all day 😊")
        .await
        .unwrap();
    store
        .update_preferences("u1", "listening to music today 😢")
        .await
        .unwrap();

    let session = store.get_or_create("u1").await.unwrap();
    assert_eq!(session.preferences.mood, Mood::Sad);
    assert!(session.preferences.topics.contains("code"));
    assert!(session.preferences.topics.contains("music"));
}

#[tokio::test]
async fn test_important_info_is_overwritten_not_merged() {
    let store = SessionStore::new();

    store
        .update_preferences("u1", "project: first")
        .await
        .unwrap();
    store
        .update_preferences("u1", "project: second")
        .await
        .unwrap();

    let session = store.get_or_create("u1").await.unwrap();
    assert_eq!(
        session.important_info.get("project").map(String::as_str),
        Some("second")
    );
}

#[tokio::test]
async fn test_sweep_idle_removes_only_stale_sessions() {
    let store = SessionStore::new();

    store.get_or_create("u_old").await.unwrap();
    let now = Utc::now();

    store.sweep_idle(now + Duration::minutes(31)).await;
    assert!(!store.contains("u_old").await);

    store.get_or_create("u_new").await.unwrap();
    store.sweep_idle(Utc::now() + Duration::minutes(10)).await;
    assert!(store.contains("u_new").await);
}

#[tokio::test]
async fn test_custom_idle_timeout() {
    let store = SessionStore::new().with_idle_timeout(Duration::seconds(5));

    store.get_or_create("u1").await.unwrap();
    store.sweep_idle(Utc::now() + Duration::seconds(6)).await;

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_clear_empties_history_but_keeps_preferences() {
    let store = SessionStore::new();

    store
        .update_preferences("u1", "I love game nights 😊")
        .await
        .unwrap();
    store.record_turn("u1", "hi", "hello").await.unwrap();

    store.clear("u1").await.unwrap();

    let history = store.history_of("u1").await.unwrap();
    assert!(history.is_empty());

    let session = store.get_or_create("u1").await.unwrap();
    assert_eq!(session.preferences.mood, Mood::Happy);
    assert!(session.preferences.topics.contains("game"));
}

#[tokio::test]
async fn test_clear_all_then_history_is_empty() {
    let store = SessionStore::new();

    store.record_turn("u1", "hi", "hello").await.unwrap();
    store.record_turn("u2", "hey", "hi").await.unwrap();

    store.clear_all().await;

    assert!(store.history_of("u1").await.unwrap().is_empty());
    assert!(store.history_of("u2").await.unwrap().is_empty());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_history_of_unknown_user_is_empty() {
    let store = SessionStore::new();
    assert!(store.history_of("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_analytics_snapshot() {
    let store = SessionStore::new();

    store.record_turn("u1", "hi", "hello").await.unwrap();
    store.get_or_create("u2").await.unwrap();

    let analytics = store.analytics().await;
    assert_eq!(analytics.active_sessions, 2);
    assert_eq!(analytics.sessions[0].user_id, "u1");
    assert_eq!(analytics.sessions[0].turn_count, 2);
    assert_eq!(analytics.sessions[1].user_id, "u2");
    assert_eq!(analytics.sessions[1].turn_count, 0);

    let json = serde_json::to_string(&analytics).unwrap();
    assert!(json.contains("\"active_sessions\":2"));
}
