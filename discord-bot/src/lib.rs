//! # discord-bot
//!
//! serenity-based Discord wiring for the chat bot: gateway event handler,
//! mention stripping, ordered chunk delivery with fallback notices, env
//! config, and the run loop.

pub mod adapters;
pub mod bot_adapter;
pub mod config;
pub mod deliver;
pub mod handler;
pub mod mention;
pub mod runner;

pub use adapters::DiscordMessageWrapper;
pub use bot_adapter::DiscordBot;
pub use config::BotConfig;
pub use deliver::{deliver_chunks, EMPTY_REPLY_NOTICE, ERROR_NOTICE, SEND_FAILURE_NOTICE};
pub use handler::Handler;
pub use mention::strip_mentions;
pub use runner::{build_service, run_bot};
