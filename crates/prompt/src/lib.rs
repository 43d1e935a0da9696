//! # Prompt
//!
//! Chat message types (one-to-one with OpenAI Chat Completions roles) and the
//! persona system-prompt builder.
//!
//! ## Usage
//!
//! The chat service builds its model input from [`ChatMessage`] values and uses
//! [`persona_system_prompt`] to interpolate static persona instructions with
//! session-derived facts (mood, topics, important notes).
//!
//! ## External interactions
//!
//! - **AI models**: Output is sent to LLM APIs through the llm-client crate.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of the OpenAI `messages` array.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Builds the system prompt for one chat turn: static persona instructions
/// followed by a user profile block with session-derived facts.
///
/// # Arguments
///
/// * `persona` - Static persona instructions (who the bot is, how it speaks)
/// * `user_name` - Display name of the user this turn belongs to
/// * `mood` - Current detected mood (`neutral`, `happy`, `sad`)
/// * `topics` - Accumulated topics of interest, joined as a comma list
/// * `important_info` - `label: value` pairs remembered for this user
///
/// # Returns
///
/// A single string used as the first (system) message of the model input.
pub fn persona_system_prompt(
    persona: &str,
    user_name: &str,
    mood: &str,
    topics: &[String],
    important_info: &[(String, String)],
) -> String {
    let info = important_info
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::from(persona);
    out.push_str("\n\nUser profile:\n");
    out.push_str(&format!("- Name: {}\n", user_name));
    out.push_str(&format!("- Mood: {}\n", mood));
    out.push_str(&format!("- Topics of interest: {}\n", topics.join(", ")));
    out.push_str(&format!("- Important notes: {}", info));
    out
}
