//! Long-reply splitting: converts one model reply into bounded chunks,
//! splitting on the largest semantic boundary that fits.
//!
//! Priority order: paragraph (line break), then sentence (`.`/`!`/`?` followed
//! by whitespace), then clause (`,` followed by whitespace). A single clause
//! longer than the limit goes into its own chunk as accepted overflow.
//!
//! Lengths are measured in chars, so a chunk is never cut inside a character.

/// Maximum chunk body length, leaving footer headroom under the platform's
/// ~2000-char message limit.
pub const MAX_CHUNK_LEN: usize = 1900;

/// Appended to every chunk except the last.
pub const CONTINUATION_FOOTER: &str = "\n\n*(more to follow...)*";

/// Appended to the final chunk.
pub const CLOSING_FOOTER: &str = "\n\n*(that's all! ask me anything else 💕)*";

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn flush(bodies: &mut Vec<String>, current: &mut String) {
    if current.trim().is_empty() {
        current.clear();
    } else {
        bodies.push(std::mem::take(current));
    }
}

/// Splits `content` into ordered chunks of at most `max_len` chars each
/// (before footers), suffixing every chunk but the last with
/// [`CONTINUATION_FOOTER`] and the last with [`CLOSING_FOOTER`].
///
/// Whitespace-only input produces zero chunks; the caller must treat that as
/// "nothing to send" and substitute a fallback notice.
pub fn split_response(content: &str, max_len: usize) -> Vec<String> {
    let mut bodies: Vec<String> = Vec::new();
    let mut current = String::new();

    for paragraph in content.split('\n') {
        if char_len(paragraph) > max_len {
            split_long_paragraph(paragraph, max_len, &mut bodies, &mut current);
        } else if char_len(&current) + char_len(paragraph) + 1 > max_len {
            flush(&mut bodies, &mut current);
            current.push_str(paragraph);
            current.push('\n');
        } else {
            current.push_str(paragraph);
            current.push('\n');
        }
    }
    flush(&mut bodies, &mut current);

    let last = bodies.len().saturating_sub(1);
    bodies
        .iter()
        .enumerate()
        .map(|(i, body)| format_chunk(body, i == last))
        .collect()
}

/// Sentence-level accumulation for a paragraph that alone exceeds the limit.
fn split_long_paragraph(
    paragraph: &str,
    max_len: usize,
    bodies: &mut Vec<String>,
    current: &mut String,
) {
    for sentence in split_sentences(paragraph) {
        if char_len(current) + char_len(sentence) + 1 > max_len {
            flush(bodies, current);
            if char_len(sentence) > max_len {
                split_long_sentence(sentence, max_len, bodies, current);
            } else {
                current.push_str(sentence);
                current.push('\n');
            }
        } else {
            current.push_str(sentence);
            current.push('\n');
        }
    }
}

/// Clause-level accumulation for a sentence that alone exceeds the limit.
/// Each clause is re-suffixed with a trailing comma and line break. A clause
/// longer than the limit has no boundary left below it and becomes its own
/// chunk unmodified.
fn split_long_sentence(
    sentence: &str,
    max_len: usize,
    bodies: &mut Vec<String>,
    current: &mut String,
) {
    for clause in split_clauses(sentence) {
        if char_len(clause) > max_len {
            flush(bodies, current);
            bodies.push(clause.to_string());
        } else if char_len(current) + char_len(clause) + 2 > max_len {
            flush(bodies, current);
            current.push_str(clause);
            current.push_str(",\n");
        } else {
            current.push_str(clause);
            current.push_str(",\n");
        }
    }
}

/// Splits on `.`/`!`/`?` followed by whitespace. The punctuation stays with
/// its sentence; the separating whitespace run is consumed.
fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut iter = paragraph.char_indices().peekable();
    while let Some((i, ch)) = iter.next() {
        if matches!(ch, '.' | '!' | '?') {
            let boundary = matches!(iter.peek(), Some(&(_, next)) if next.is_whitespace());
            if boundary {
                let end = i + ch.len_utf8();
                if end > start {
                    out.push(&paragraph[start..end]);
                }
                while matches!(iter.peek(), Some(&(_, ws)) if ws.is_whitespace()) {
                    iter.next();
                }
                start = iter.peek().map(|&(j, _)| j).unwrap_or(paragraph.len());
            }
        }
    }
    if start < paragraph.len() {
        out.push(&paragraph[start..]);
    }
    out
}

/// Splits on `,` followed by whitespace. The comma and the whitespace run are
/// consumed; callers re-suffix fragments with `,\n`.
fn split_clauses(sentence: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut iter = sentence.char_indices().peekable();
    while let Some((i, ch)) = iter.next() {
        if ch == ',' {
            let boundary = matches!(iter.peek(), Some(&(_, next)) if next.is_whitespace());
            if boundary {
                out.push(&sentence[start..i]);
                while matches!(iter.peek(), Some(&(_, ws)) if ws.is_whitespace()) {
                    iter.next();
                }
                start = iter.peek().map(|&(j, _)| j).unwrap_or(sentence.len());
            }
        }
    }
    if start < sentence.len() {
        out.push(&sentence[start..]);
    }
    out
}

fn format_chunk(body: &str, is_last: bool) -> String {
    let body = body.trim();
    if is_last {
        format!("{}{}", body, CLOSING_FOOTER)
    } else {
        format!("{}{}", body, CONTINUATION_FOOTER)
    }
}
