//! Core types: user, channel, message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (Discord snowflake id plus display name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Channel identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: u64,
}

/// A single inbound message with author, channel, and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub channel: Channel,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}
