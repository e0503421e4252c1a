//! Paragraph deduplication within a single cleaned message.
//!
//! Tool-use transcripts restate the same explanatory paragraph across
//! retries. This pass drops exact structural repeats using a normalized
//! key, without attempting semantic similarity.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Paragraphs shorter than this (after trimming) are never treated as
/// duplicates - single words and stray punctuation are not meaningful
/// repeats.
pub const MIN_DUPLICATE_LEN: usize = 10;

static RE_PARAGRAPH_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Removes repeated paragraphs, keeping the first occurrence of each.
///
/// The duplicate key is the lowercased paragraph with all whitespace
/// removed, so reflowed or re-indented repeats still collide.
pub struct ParagraphDeduplicator {
    deduped_count: usize,
}

impl ParagraphDeduplicator {
    pub fn new() -> Self {
        Self { deduped_count: 0 }
    }

    /// Total paragraphs dropped across all messages.
    pub fn deduped_count(&self) -> usize {
        self.deduped_count
    }

    /// Deduplicate paragraphs in one message, preserving relative order.
    pub fn dedupe(&mut self, text: &str) -> String {
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept: Vec<&str> = Vec::new();

        for paragraph in RE_PARAGRAPH_SPLIT.split(text) {
            if paragraph.trim().chars().count() < MIN_DUPLICATE_LEN {
                kept.push(paragraph);
                continue;
            }

            let key: String = paragraph
                .to_lowercase()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();

            if seen.insert(key) {
                kept.push(paragraph);
            } else {
                self.deduped_count += 1;
            }
        }

        kept.join("\n\n")
    }
}

impl Default for ParagraphDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}
