//! Whitespace normalization for cleaned messages.
//!
//! Rule deletions leave ragged gaps behind: runs of blank lines, trailing
//! spaces, lines holding nothing but whitespace. This pass flattens them to
//! at most one blank line and trims the message ends.

use std::sync::LazyLock;

use regex::Regex;

static RE_TRAILING_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());
static RE_WS_ONLY_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+[ \t]+\n+").unwrap());
static RE_EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapse excess whitespace and trim the message.
///
/// Trailing horizontal whitespace is stripped before newline runs are
/// collapsed, so a whitespace-only line between blank lines cannot survive
/// as a three-newline run. One pass reaches a fixed point.
pub fn normalize_whitespace(text: &str) -> String {
    let text = RE_TRAILING_WS.replace_all(text, "\n");
    let text = RE_WS_ONLY_LINE.replace_all(&text, "\n\n");
    let text = RE_EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}
