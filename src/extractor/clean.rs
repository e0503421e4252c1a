//! Role-aware message cleaning.
//!
//! Applies the ordered rule catalogs to one turn's raw text. User and
//! assistant turns share the noise rules but differ in what is unwrapped:
//! user text keeps the payload of task/feedback/message/answer tags, while
//! assistant text keeps thinking sections (internally sanitized) and the
//! declared result of a completion attempt.

use tracing::trace;

use super::normalize::normalize_whitespace;
use super::rules;
use super::segment::{Speaker, Turn};

/// Cleans one turn's text according to its role.
///
/// Pure: the output depends only on the turn's text and speaker. The rule
/// catalogs are process-wide statics, so the cleaner itself carries no
/// state.
pub struct MessageCleaner;

impl MessageCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Produce the cleaned text for a turn. May be empty or whitespace-only
    /// when nothing conversational survives; the caller decides what to do
    /// with such turns.
    pub fn clean(&self, turn: &Turn) -> String {
        match turn.speaker {
            Speaker::User => clean_user(&turn.text),
            Speaker::Assistant => clean_assistant(&turn.text),
        }
    }
}

impl Default for MessageCleaner {
    fn default() -> Self {
        Self::new()
    }
}

fn clean_user(raw: &str) -> String {
    let mut text = rules::separator_rule().apply(raw);
    for rule in rules::user_rules() {
        text = rule.apply(&text);
    }
    trace!(from = raw.len(), to = text.len(), "cleaned user turn");
    normalize_whitespace(&text)
}

fn clean_assistant(raw: &str) -> String {
    let text = rules::separator_rule().apply(raw);
    let mut text = rewrite_thinking_sections(&text);
    for rule in rules::assistant_rules() {
        text = rule.apply(&text);
    }
    trace!(from = raw.len(), to = text.len(), "cleaned assistant turn");
    normalize_whitespace(&text)
}

/// Re-clean the inside of every thinking section, keeping the tags.
///
/// Only the bounded nested subset runs here (file contents, code fences,
/// path references); re-entering the full assistant catalog would strip
/// the tags the downstream consumer relies on to tell reasoning from the
/// final answer.
fn rewrite_thinking_sections(text: &str) -> String {
    rules::RE_THINKING
        .replace_all(text, |caps: &regex::Captures| {
            let mut inner = caps[1].to_string();
            for rule in rules::thinking_rules() {
                inner = rule.apply(&inner);
            }
            format!("<thinking>{}</thinking>", inner)
        })
        .into_owned()
}
