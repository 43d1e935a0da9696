//! Main entry: validate config, init logging, build the service, start the
//! serenity client.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use serenity::prelude::*;
use tracing::info;

use cbot_core::init_tracing;
use chat_service::ConversationService;
use llm_client::{LlmClient, OpenAILlmClient};
use session::SessionStore;

use crate::config::BotConfig;
use crate::handler::Handler;

/// Builds the ConversationService from config (also used by tests that skip
/// the gateway).
pub fn build_service(config: &BotConfig) -> ConversationService {
    let llm: Arc<dyn LlmClient> = Arc::new(
        OpenAILlmClient::with_base_url(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
        )
        .with_model(config.ai_model.clone()),
    );
    let sessions = Arc::new(SessionStore::new());
    let mut service = ConversationService::new(llm, sessions);
    if let Some(persona) = &config.system_prompt {
        service = service.with_persona(persona.clone());
    }
    service
}

/// Runs the bot until the gateway connection ends.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    if let Some(parent) = Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    init_tracing(&config.log_file)?;

    let service = Arc::new(build_service(&config));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_PRESENCES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    info!(model = %config.ai_model, "Starting Discord chat bot");

    let mut client = Client::builder(&config.bot_token, intents)
        .event_handler(Handler::new(service))
        .await
        .context("Failed to create Discord client")?;

    client.start().await.context("Discord client error")?;

    Ok(())
}
