//! Adapters from serenity types to core types.

use cbot_core::{Channel, Message, ToCoreMessage, ToCoreUser, User};
use chrono::{DateTime, Utc};

/// Wraps a serenity message for conversion to [`cbot_core::Message`].
pub struct DiscordMessageWrapper<'a>(pub &'a serenity::model::channel::Message);

impl ToCoreUser for DiscordMessageWrapper<'_> {
    fn to_core(&self) -> User {
        User {
            id: self.0.author.id.get(),
            name: self.0.author.name.clone(),
        }
    }
}

impl ToCoreMessage for DiscordMessageWrapper<'_> {
    fn to_core(&self) -> Message {
        let created_at = DateTime::<Utc>::from_timestamp(self.0.timestamp.unix_timestamp(), 0)
            .unwrap_or_else(Utc::now);
        Message {
            id: self.0.id.to_string(),
            user: ToCoreUser::to_core(self),
            channel: Channel {
                id: self.0.channel_id.get(),
            },
            content: self.0.content.clone(),
            created_at,
        }
    }
}
