//! Gateway event handler: filters inbound messages, runs the chat turn, and
//! hands the chunks to delivery.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::gateway::Ready;
use tokio::sync::Mutex;
use tracing::{error, info};

use cbot_core::{Bot, ToCoreMessage};
use chat_service::ConversationService;

use crate::adapters::DiscordMessageWrapper;
use crate::bot_adapter::DiscordBot;
use crate::deliver::{deliver_chunks, EMPTY_REPLY_NOTICE, ERROR_NOTICE};
use crate::mention::strip_mentions;

/// How long a handled message id stays in the dedup cache.
const DEDUP_WINDOW: Duration = Duration::from_secs(60);

pub struct Handler {
    service: Arc<ConversationService>,
    processed: Arc<Mutex<HashSet<String>>>,
}

impl Handler {
    pub fn new(service: Arc<ConversationService>) -> Self {
        Self {
            service,
            processed: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Inserts the message id into the dedup cache. Returns false if it was
    /// already present; otherwise schedules its removal after the window.
    async fn mark_processed(&self, message_id: &str) -> bool {
        let inserted = {
            let mut processed = self.processed.lock().await;
            processed.insert(message_id.to_string())
        };
        if inserted {
            let processed = self.processed.clone();
            let id = message_id.to_string();
            tokio::spawn(async move {
                tokio::time::sleep(DEDUP_WINDOW).await;
                processed.lock().await.remove(&id);
            });
        }
        inserted
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: serenity::model::channel::Message) {
        if msg.author.bot {
            return;
        }
        if !msg.mentions_me(&ctx.http).await.unwrap_or(false) {
            return;
        }
        if !self.mark_processed(&msg.id.to_string()).await {
            return;
        }

        let content = strip_mentions(&msg.content);
        let user_id = msg.author.id.get().to_string();
        let user_name = msg.author.name.clone();

        info!(
            user_id = %user_id,
            user_name = %user_name,
            content = %content,
            "Received mention"
        );

        let _ = msg.channel_id.broadcast_typing(&ctx.http).await;

        let core_msg = DiscordMessageWrapper(&msg).to_core();
        let bot = DiscordBot::new(ctx.http.clone());

        match self.service.chat(&content, &user_id, &user_name).await {
            Ok(chunks) if chunks.is_empty() => {
                if let Err(e) = bot.reply_to(&core_msg, EMPTY_REPLY_NOTICE).await {
                    error!(error = %e, user_id = %user_id, "Failed to send empty-reply notice");
                }
            }
            Ok(chunks) => {
                deliver_chunks(&bot, &core_msg, &chunks).await;
            }
            Err(e) => {
                error!(error = %e, user_id = %user_id, "Chat turn failed");
                if let Err(e) = bot.reply_to(&core_msg, ERROR_NOTICE).await {
                    error!(error = %e, user_id = %user_id, "Failed to send error notice");
                }
            }
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(bot_user = %ready.user.name, "Chat bot is ready");
    }
}
