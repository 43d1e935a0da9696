//! Bot configuration, loaded from environment variables.
//! Required: BOT_TOKEN (CLI-overridable), OPENAI_API_KEY. Optional with
//! defaults: OPENAI_BASE_URL, AI_MODEL, SYSTEM_PROMPT, LOG_FILE.

use anyhow::{Context, Result};
use std::env;

pub struct BotConfig {
    pub bot_token: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub ai_model: String,
    /// Persona override; the service default applies when unset.
    pub system_prompt: Option<String>,
    pub log_file: String,
}

impl BotConfig {
    /// Loads config from environment variables. A token passed in (e.g. from
    /// the CLI) overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let ai_model = env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let system_prompt = env::var("SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/discord-bot.log".to_string());

        Ok(Self {
            bot_token,
            openai_api_key,
            openai_base_url,
            ai_model,
            system_prompt,
            log_file,
        })
    }

    /// Rejects blank secrets before any client is built.
    pub fn validate(&self) -> cbot_core::Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(cbot_core::CbotError::Config(
                "BOT_TOKEN is empty".to_string(),
            ));
        }
        if self.openai_api_key.trim().is_empty() {
            return Err(cbot_core::CbotError::Config(
                "OPENAI_API_KEY is empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "OPENAI_API_KEY",
            "OPENAI_BASE_URL",
            "AI_MODEL",
            "SYSTEM_PROMPT",
            "LOG_FILE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("OPENAI_API_KEY", "test_key");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.openai_api_key, "test_key");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.ai_model, "gpt-4o-mini");
        assert!(config.system_prompt.is_none());
        assert_eq!(config.log_file, "logs/discord-bot.log");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_missing_bot_token_fails() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "test_key");

        assert!(BotConfig::load(None).is_err());
    }

    #[test]
    #[serial]
    fn test_load_missing_api_key_fails() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        assert!(BotConfig::load(None).is_err());
    }

    #[test]
    #[serial]
    fn test_cli_token_overrides_env() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("OPENAI_API_KEY", "test_key");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "override_token");
    }

    #[test]
    #[serial]
    fn test_blank_system_prompt_is_ignored() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("OPENAI_API_KEY", "test_key");
        env::set_var("SYSTEM_PROMPT", "   ");

        let config = BotConfig::load(None).unwrap();
        assert!(config.system_prompt.is_none());
    }

    #[test]
    #[serial]
    fn test_validate_rejects_blank_token() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "test_key");

        let config = BotConfig::load(Some("   ".to_string())).unwrap();
        assert!(config.validate().is_err());
    }
}
