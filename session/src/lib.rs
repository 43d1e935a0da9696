//! # Session
//!
//! Per-user conversational state for the chat bot: the [`Session`] data model,
//! the [`SessionStore`] that owns all sessions, and the [`PreferenceRules`]
//! keyword heuristics that derive mood/topic/info signals from user text.
//!
//! The store is volatile and single-process: sessions are created lazily on
//! first contact and removed only by the idle sweep or an explicit clear.

mod rules;
mod store;
mod types;

pub use rules::{PreferenceRules, ScanOutcome, IMPORTANCE_MARKERS};
pub use store::{SessionStore, MAX_CONTEXT, RECENT_TAIL};
pub use types::{Mood, Preferences, Role, Session, SessionSummary, StoreAnalytics, Turn};
