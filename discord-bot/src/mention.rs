//! Mention stripping for inbound messages.
//!
//! Discord delivers mentions as `<@id>` / `<@!id>` tokens inside the raw
//! content; the question for the model is the content with those removed.

use regex::Regex;
use std::sync::OnceLock;

static MENTION_RE: OnceLock<Regex> = OnceLock::new();

fn mention_re() -> &'static Regex {
    MENTION_RE.get_or_init(|| Regex::new(r"<@!?[0-9]+>").expect("valid mention pattern"))
}

/// Removes every user-mention token and trims the remainder.
pub fn strip_mentions(text: &str) -> String {
    mention_re().replace_all(text, "").trim().to_string()
}
