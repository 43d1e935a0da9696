//! Ordered chunk delivery with per-chunk fallback notices.
//!
//! A failed send is local to its chunk: one best-effort fallback notice is
//! attempted, a fallback failure is only logged, and the remaining chunks
//! still go out. Every path ends in a delivered chunk or a delivered apology.

use cbot_core::{Bot, Message};
use tracing::error;

/// Sent when the service produced no chunks or the chat turn failed validation upstream.
pub const EMPTY_REPLY_NOTICE: &str =
    "Sorry, I couldn't come up with a reply to that. Could you try again? 🥺";

/// Sent once after a chunk fails to deliver.
pub const SEND_FAILURE_NOTICE: &str =
    "Sorry, something went wrong while sending my reply. Could you try again? 🙏";

/// Sent when the chat turn itself failed (e.g. the model call).
pub const ERROR_NOTICE: &str =
    "Something went wrong on my end... sorry! 😢 Could you try again later?";

/// Sends each chunk as a reply to `message`, in order. Blank chunks are skipped.
pub async fn deliver_chunks(bot: &dyn Bot, message: &Message, chunks: &[String]) {
    for chunk in chunks {
        let text = chunk.trim();
        if text.is_empty() {
            continue;
        }
        if let Err(e) = bot.reply_to(message, text).await {
            error!(error = %e, message_id = %message.id, "Failed to send chunk");
            if let Err(e) = bot.reply_to(message, SEND_FAILURE_NOTICE).await {
                error!(error = %e, message_id = %message.id, "Failed to send fallback notice");
            }
        }
    }
}
