//! Conversation orchestration: one chat turn from user text to deliverable chunks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use cbot_core::{CbotError, Result};
use llm_client::LlmClient;
use prompt::{persona_system_prompt, ChatMessage};
use session::{Role, SessionStore, StoreAnalytics, Turn};

use crate::splitter::{split_response, MAX_CHUNK_LEN};

/// Static persona instructions used when no override is configured.
pub const DEFAULT_PERSONA: &str = "You are a friendly, upbeat AI assistant chatting on Discord. \
Keep replies warm and conversational, and add a light emoji when it fits. \
Explain code clearly when asked. Stay consistent with everything said earlier in the conversation \
and bring up remembered details when they help. If you are not sure about something, say so \
honestly instead of guessing.";

/// Run the idle sweep on every Nth successful chat call. A counter keeps the
/// trigger deterministic; the sweep itself stays a best-effort amortized
/// cleanup, not a correctness guarantee.
pub const SWEEP_EVERY: u64 = 10;

/// Orchestrates a single chat turn against the model and the session store.
pub struct ConversationService {
    llm: Arc<dyn LlmClient>,
    sessions: Arc<SessionStore>,
    persona: String,
    max_chunk_len: usize,
    sweep_every: u64,
    calls: AtomicU64,
}

impl ConversationService {
    pub fn new(llm: Arc<dyn LlmClient>, sessions: Arc<SessionStore>) -> Self {
        Self {
            llm,
            sessions,
            persona: DEFAULT_PERSONA.to_string(),
            max_chunk_len: MAX_CHUNK_LEN,
            sweep_every: SWEEP_EVERY,
            calls: AtomicU64::new(0),
        }
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    pub fn with_max_chunk_len(mut self, max_chunk_len: usize) -> Self {
        self.max_chunk_len = max_chunk_len;
        self
    }

    /// Overrides the sweep cadence. Zero disables the opportunistic sweep.
    pub fn with_sweep_every(mut self, sweep_every: u64) -> Self {
        self.sweep_every = sweep_every;
        self
    }

    /// Runs one chat turn and returns the reply chunks, in delivery order.
    ///
    /// The model call has no internally enforced timeout; the provider client
    /// owns timeout and retry policy. On model failure the session is left
    /// unmodified and the error surfaces as [`CbotError::Model`]. An empty
    /// `message` is accepted and passed through.
    #[instrument(skip(self, message))]
    pub async fn chat(
        &self,
        message: &str,
        user_id: &str,
        user_name: &str,
    ) -> Result<Vec<String>> {
        if user_id.trim().is_empty() {
            return Err(CbotError::InvalidArgument(
                "user_id must not be empty".to_string(),
            ));
        }
        if user_name.trim().is_empty() {
            return Err(CbotError::InvalidArgument(
                "user_name must not be empty".to_string(),
            ));
        }

        let session = self.sessions.get_or_create(user_id).await?;

        let topics: Vec<String> = session.preferences.topics.iter().cloned().collect();
        let info: Vec<(String, String)> = session
            .important_info
            .iter()
            .map(|(label, value)| (label.clone(), value.clone()))
            .collect();
        let system = persona_system_prompt(
            &self.persona,
            user_name,
            session.preferences.mood.as_str(),
            &topics,
            &info,
        );

        let mut messages = Vec::with_capacity(session.context.len() + 2);
        messages.push(ChatMessage::system(system));
        for turn in &session.context {
            messages.push(match turn.role {
                Role::User => ChatMessage::user(turn.text.as_str()),
                Role::Assistant => ChatMessage::assistant(turn.text.as_str()),
            });
        }
        let user_turn = format!("[{}]: {}", user_name, message);
        messages.push(ChatMessage::user(user_turn.as_str()));

        info!(
            user_id = %user_id,
            user_name = %user_name,
            message_count = messages.len(),
            "Sending chat turn to model"
        );

        let reply = self
            .llm
            .invoke(&messages)
            .await
            .map_err(|e| CbotError::Model(e.into()))?;

        self.sessions
            .record_turn(user_id, &user_turn, &reply)
            .await?;
        self.sessions.update_preferences(user_id, message).await?;
        self.maybe_sweep().await;

        debug!(user_id = %user_id, reply_len = reply.len(), "Received model reply");

        Ok(split_response(&reply, self.max_chunk_len))
    }

    async fn maybe_sweep(&self) {
        let calls = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        if self.sweep_every > 0 && calls % self.sweep_every == 0 {
            debug!(calls, "Running idle session sweep");
            self.sessions.sweep_idle(Utc::now()).await;
        }
    }

    /// Empties one user's conversation history. Preferences are retained.
    pub async fn clear_history(&self, user_id: &str) -> Result<()> {
        self.sessions.clear(user_id).await
    }

    /// Removes every session.
    pub async fn clear_all(&self) {
        self.sessions.clear_all().await;
    }

    /// Read-only projection of one user's conversation history.
    pub async fn history(&self, user_id: &str) -> Result<Vec<Turn>> {
        self.sessions.history_of(user_id).await
    }

    /// Snapshot of session-store state for logs and diagnostics.
    pub async fn analytics(&self) -> StoreAnalytics {
        self.sessions.analytics().await
    }
}
