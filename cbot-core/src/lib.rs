//! # cbot-core
//!
//! Core types and traits for the Discord chat bot: [`Bot`], message and user types,
//! the error taxonomy, and tracing initialization. Transport-agnostic; used by
//! discord-bot and chat-service.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{CbotError, Result};
pub use logger::init_tracing;
pub use types::{Channel, Message, ToCoreMessage, ToCoreUser, User};
