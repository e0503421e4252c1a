//! Conversation extraction pipeline.
//!
//! Condenses an exported agent transcript down to its conversational
//! substance: segment the raw text into speaker turns, clean each turn
//! with the ordered rule catalogs, drop turns that contributed nothing,
//! deduplicate repeated paragraphs, and serialize back to the same
//! header/separator convention the export used.
//!
//! Data flows strictly one way - raw text in, cleaned conversation and
//! size metrics out. Every stage is a linear scan; there is no feedback
//! between stages and no shared mutable state, so processing many files
//! in parallel is safe by construction.

pub mod clean;
pub mod dedupe;
pub mod normalize;
pub mod rules;
pub mod segment;

use humansize::{format_size, BINARY};
use tracing::debug;

pub use clean::MessageCleaner;
pub use dedupe::ParagraphDeduplicator;
pub use segment::{segment_turns, Speaker, Turn};

/// An ordered sequence of cleaned turns, in transcript order.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// The turns, in original dialogue order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Serialize back to the export convention: `**Speaker:**`, blank line,
    /// body, with turns separated by a `---` line surrounded by blank lines
    /// and no trailing separator.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, turn) in self.turns.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n---\n\n");
            }
            out.push_str("**");
            out.push_str(turn.speaker.label());
            out.push_str(":**\n\n");
            out.push_str(&turn.text);
        }
        out
    }
}

/// Size accounting for one whole-file run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractionStats {
    pub original_bytes: usize,
    pub cleaned_bytes: usize,
    pub turns_segmented: usize,
    pub turns_emitted: usize,
    pub turns_dropped_empty: usize,
    pub paragraphs_deduplicated: usize,
}

impl ExtractionStats {
    /// Percentage of the original size removed by cleaning. Negative when
    /// the serialized output is larger than the input (tiny transcripts).
    pub fn reduction_percentage(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (self.original_bytes as f64 - self.cleaned_bytes as f64) / self.original_bytes as f64
            * 100.0
    }

    /// One-line size summary for display.
    pub fn summary(&self) -> String {
        format!(
            "Size reduction: {} -> {} ({:.1}%)",
            format_size(self.original_bytes as u64, BINARY),
            format_size(self.cleaned_bytes as u64, BINARY),
            self.reduction_percentage()
        )
    }
}

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub conversation: Conversation,
    /// The serialized form of `conversation`, as written to disk.
    pub rendered: String,
    pub stats: ExtractionStats,
}

/// Runs the full pipeline over one transcript.
pub struct ConversationExtractor {
    cleaner: MessageCleaner,
    deduper: ParagraphDeduplicator,
}

impl ConversationExtractor {
    pub fn new() -> Self {
        Self {
            cleaner: MessageCleaner::new(),
            deduper: ParagraphDeduplicator::new(),
        }
    }

    /// Segment, clean, filter and deduplicate one transcript.
    ///
    /// Turns whose cleaned text is empty are excluded from the result;
    /// zero recognizable headers yields an empty conversation. Neither is
    /// an error.
    pub fn extract(&mut self, raw: &str) -> Extraction {
        let segmented = segment_turns(raw);
        let turns_segmented = segmented.len();
        let dedup_before = self.deduper.deduped_count();

        let mut turns = Vec::with_capacity(segmented.len());
        let mut dropped = 0usize;
        for turn in segmented {
            let cleaned = self.cleaner.clean(&turn);
            if cleaned.trim().is_empty() {
                dropped += 1;
                continue;
            }
            let deduped = self.deduper.dedupe(&cleaned);
            turns.push(Turn::new(turn.speaker, deduped));
        }

        let conversation = Conversation { turns };
        let rendered = conversation.render();
        let stats = ExtractionStats {
            original_bytes: raw.len(),
            cleaned_bytes: rendered.len(),
            turns_segmented,
            turns_emitted: conversation.len(),
            turns_dropped_empty: dropped,
            paragraphs_deduplicated: self.deduper.deduped_count() - dedup_before,
        };

        debug!(
            segmented = stats.turns_segmented,
            emitted = stats.turns_emitted,
            dropped = stats.turns_dropped_empty,
            deduped = stats.paragraphs_deduplicated,
            "extracted conversation"
        );

        Extraction {
            conversation,
            rendered,
            stats,
        }
    }
}

impl Default for ConversationExtractor {
    fn default() -> Self {
        Self::new()
    }
}
