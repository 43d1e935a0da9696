//! Bot abstraction for outbound message delivery.
//!
//! [`Bot`] is transport-agnostic; the serenity-backed implementation lives in discord-bot.

use crate::error::Result;
use crate::types::Message;
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Discord).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply referencing the given message (same channel).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
}
