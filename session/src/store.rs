//! In-memory session store: lazy creation, turn recording with compaction,
//! preference updates, idle sweep, and read-only projections.
//!
//! ## Thread safety
//!
//! All sessions live behind one `Arc<RwLock<HashMap>>`. Every mutating
//! operation holds the write lock for its whole critical section, so
//! interleaved calls for the same user cannot tear a session. The original
//! event-loop model serialized this implicitly; the lock makes it explicit.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use cbot_core::{CbotError, Result};

use crate::rules::{is_important, PreferenceRules};
use crate::types::{Session, SessionSummary, StoreAnalytics, Turn};

/// Upper bound on `context` length after compaction.
pub const MAX_CONTEXT: usize = 10;
/// Size of the recent tail always kept by compaction.
pub const RECENT_TAIL: usize = 8;

const DEFAULT_IDLE_TIMEOUT_MINUTES: i64 = 30;

/// Owns all per-user conversational state. Construct once at startup and
/// inject wherever needed; state is volatile and lost on process exit.
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    rules: PreferenceRules,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_rules(PreferenceRules::default())
    }

    pub fn with_rules(rules: PreferenceRules) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            rules,
            idle_timeout: Duration::minutes(DEFAULT_IDLE_TIMEOUT_MINUTES),
        }
    }

    /// Overrides the inactivity threshold used by [`SessionStore::sweep_idle`].
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Returns the existing session for `user_id`, inserting a fresh one on
    /// first contact. The returned value is a snapshot clone.
    pub async fn get_or_create(&self, user_id: &str) -> Result<Session> {
        check_user_id(user_id)?;
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(user_id.to_string())
            .or_insert_with(|| Session::new(user_id, Utc::now()));
        Ok(session.clone())
    }

    /// Appends a user turn and an assistant turn, in that order, refreshes
    /// `last_interaction`, then compacts if the context bound is exceeded.
    pub async fn record_turn(
        &self,
        user_id: &str,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<()> {
        check_user_id(user_id)?;
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(user_id.to_string())
            .or_insert_with(|| Session::new(user_id, Utc::now()));

        session.context.push(Turn::user(user_text));
        session.context.push(Turn::assistant(assistant_text));
        session.last_interaction = Utc::now();

        if session.context.len() > MAX_CONTEXT {
            compact(&mut session.context);
            debug!(
                user_id = %user_id,
                context_len = session.context.len(),
                "Compacted session context"
            );
        }
        Ok(())
    }

    /// Scans `user_text` with the preference rules and applies the outcome:
    /// mood overwritten, topics added, info labels overwritten.
    pub async fn update_preferences(&self, user_id: &str, user_text: &str) -> Result<()> {
        check_user_id(user_id)?;
        let outcome = self.rules.scan(user_text);
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(user_id.to_string())
            .or_insert_with(|| Session::new(user_id, Utc::now()));

        if let Some(mood) = outcome.mood {
            session.preferences.mood = mood;
        }
        for topic in outcome.topics {
            session.preferences.topics.insert(topic);
        }
        for (label, value) in outcome.info {
            session.important_info.insert(label, value);
        }
        Ok(())
    }

    /// Removes every session idle for longer than the inactivity threshold.
    /// Full scan of the store; invoked opportunistically, not on a timer.
    pub async fn sweep_idle(&self, now: DateTime<Utc>) {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|user_id, session| {
            let keep = now - session.last_interaction <= self.idle_timeout;
            if !keep {
                info!(user_id = %user_id, "Removed idle session");
            }
            keep
        });
    }

    /// Empties one session's context. Preferences and important info are retained.
    pub async fn clear(&self, user_id: &str) -> Result<()> {
        check_user_id(user_id)?;
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(user_id) {
            session.context.clear();
            info!(user_id = %user_id, "Cleared session history");
        }
        Ok(())
    }

    /// Removes every session.
    pub async fn clear_all(&self) {
        let mut sessions = self.sessions.write().await;
        sessions.clear();
        info!("Cleared all sessions");
    }

    /// Read-only projection of one session's context; empty if no session exists.
    pub async fn history_of(&self, user_id: &str) -> Result<Vec<Turn>> {
        check_user_id(user_id)?;
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(user_id)
            .map(|s| s.context.clone())
            .unwrap_or_default())
    }

    /// Snapshot of store state for logs and diagnostics.
    pub async fn analytics(&self) -> StoreAnalytics {
        let sessions = self.sessions.read().await;
        let mut rows: Vec<SessionSummary> = sessions
            .values()
            .map(|s| SessionSummary {
                user_id: s.user_id.clone(),
                turn_count: s.context.len(),
                last_interaction: s.last_interaction,
            })
            .collect();
        rows.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        StoreAnalytics {
            active_sessions: rows.len(),
            sessions: rows,
        }
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Returns true if a session exists for `user_id`.
    pub async fn contains(&self, user_id: &str) -> bool {
        self.sessions.read().await.contains_key(user_id)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn check_user_id(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(CbotError::InvalidArgument(
            "user_id must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Keeps the union of importance-marked turns and the most recent
/// [`RECENT_TAIL`] turns, chronological and without duplicates, then truncates
/// from the front to [`MAX_CONTEXT`]. Recency wins over importance when the
/// union still exceeds the bound.
fn compact(context: &mut Vec<Turn>) {
    let tail_start = context.len().saturating_sub(RECENT_TAIL);
    let keep: Vec<usize> = (0..context.len())
        .filter(|&i| i >= tail_start || is_important(&context[i].text))
        .collect();
    let drop_front = keep.len().saturating_sub(MAX_CONTEXT);
    let kept: Vec<Turn> = keep[drop_front..]
        .iter()
        .map(|&i| context[i].clone())
        .collect();
    *context = kept;
}
