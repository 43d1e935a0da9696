//! OpenAI-compatible implementation of [`LlmClient`] via async-openai.

use anyhow::Result;
use async_openai::config::OpenAIConfig;
use async_openai::types::CreateChatCompletionRequestArgs;
use async_openai::Client;
use async_trait::async_trait;
use prompt::ChatMessage;
use tracing::instrument;

use super::{chat_message_to_openai, LlmClient};

/// async-openai based [`LlmClient`]. Works against any OpenAI-compatible
/// endpoint via `with_base_url`.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
            model: "gpt-4o-mini".to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Client::with_config(config),
            model: "gpt-4o-mini".to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages))]
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<String> {
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(openai_messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No choices in model response"),
        }
    }
}
