//! serenity-based implementation of [`cbot_core::Bot`].

use std::sync::Arc;

use async_trait::async_trait;
use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};

use cbot_core::{Bot, CbotError, Message, Result};

/// Sends messages through the Discord HTTP API.
pub struct DiscordBot {
    http: Arc<Http>,
}

impl DiscordBot {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Bot for DiscordBot {
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let message_id: u64 = message
            .id
            .parse()
            .map_err(|_| CbotError::Delivery(format!("invalid message id: {}", message.id)))?;
        let channel_id = ChannelId::new(message.channel.id);
        let builder = CreateMessage::new()
            .content(text)
            .reference_message((channel_id, MessageId::new(message_id)));
        channel_id
            .send_message(self.http.as_ref(), builder)
            .await
            .map_err(|e| CbotError::Delivery(e.to_string()))?;
        Ok(())
    }
}
