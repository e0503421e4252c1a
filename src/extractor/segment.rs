//! Turn segmentation for exported transcripts.
//!
//! An export renders each turn as a bolded speaker header (`**User:**` or
//! `**Assistant:**`) followed by a blank line. Segmentation slices the raw
//! text between consecutive headers, so a turn's span can never swallow a
//! later header even when the conventional `---` separator is missing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Speaker header: bold label, colon, then a blank line.
static RE_SPEAKER_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(User|Assistant):\*\*\n\n").unwrap());

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// The label used in the header convention.
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One speaker's contiguous message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }
}

/// Split transcript text into ordered turns.
///
/// Every byte between one header and the next (exclusive of the header
/// markup itself) lands in exactly one turn's raw text. Zero matching
/// headers yields an empty sequence, not an error.
pub fn segment_turns(content: &str) -> Vec<Turn> {
    let headers: Vec<regex::Captures> = RE_SPEAKER_HEADER.captures_iter(content).collect();

    let mut turns = Vec::with_capacity(headers.len());
    for (i, caps) in headers.iter().enumerate() {
        let whole = caps.get(0).unwrap();
        let speaker = match &caps[1] {
            "User" => Speaker::User,
            _ => Speaker::Assistant,
        };
        let end = headers
            .get(i + 1)
            .map(|next| next.get(0).unwrap().start())
            .unwrap_or(content.len());
        turns.push(Turn::new(speaker, &content[whole.end()..end]));
    }
    turns
}
