//! Session data model: turns, moods, preferences, and the per-user session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Role of a stored turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One user message or one assistant reply, stored with its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Detected mood signal. Last write wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Neutral,
    Happy,
    Sad,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
            Mood::Sad => "sad",
        }
    }
}

/// Derived user-preference signals. Topics accumulate for the life of the
/// session; mood is overwritten by the latest detected signal. Ordered set so
/// prompt interpolation stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub mood: Mood,
    pub topics: BTreeSet<String>,
}

/// All accumulated state for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub preferences: Preferences,
    /// Label to last-seen value (e.g. "project"). Overwritten on each new detection.
    pub important_info: BTreeMap<String, String>,
    /// Chronological turn records, append-only until compaction.
    pub context: Vec<Turn>,
    /// Refreshed on every chat call; drives idle eviction.
    pub last_interaction: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(user_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            preferences: Preferences::default(),
            important_info: BTreeMap::new(),
            context: Vec::new(),
            last_interaction: now,
        }
    }
}

/// Per-session row of [`StoreAnalytics`].
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub user_id: String,
    pub turn_count: usize,
    pub last_interaction: DateTime<Utc>,
}

/// Snapshot of store state, for logs and diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct StoreAnalytics {
    pub active_sessions: usize,
    pub sessions: Vec<SessionSummary>,
}
