//! # Chat service
//!
//! Orchestrates a single chat turn: build a system+history+new-message prompt,
//! invoke the model, update the session store, and split the raw reply into
//! deliverable chunks.

mod service;
mod splitter;

pub use service::{ConversationService, DEFAULT_PERSONA, SWEEP_EVERY};
pub use splitter::{
    split_response, CLOSING_FOOTER, CONTINUATION_FOOTER, MAX_CHUNK_LEN,
};
