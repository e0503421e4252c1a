//! Output path derivation and filesystem-safe name sanitization.

use std::path::{Path, PathBuf};

use deunicode::deunicode;

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Default fallback when sanitization produces an empty result.
const FALLBACK_NAME: &str = "milestone";

/// Maximum filename length for most filesystems.
const MAX_FILENAME_LENGTH: usize = 255;

/// Derive the default output path for a cleaned transcript.
///
/// Appends `suffix` to the input's base name before its extension:
/// `session.md` with suffix `_clean` becomes `session_clean.md`.
/// Extensionless inputs get the bare suffix appended.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(name)
}

/// Sanitize a user-provided label for use as a folder or file name.
///
/// Transliterates Unicode to ASCII, turns whitespace into hyphens, drops
/// characters that are invalid on common filesystems, collapses hyphen
/// runs and trims the ends. An empty result falls back to "milestone".
pub fn sanitize_name(input: &str) -> String {
    let ascii = deunicode(input);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;
    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) {
            continue;
        } else {
            result.push(c);
            last_was_hyphen = false;
        }
    }

    let trimmed = result.trim_matches(['-', '.', ' ']).to_string();
    let mut name = if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed
    };

    if name.len() > MAX_FILENAME_LENGTH {
        name.truncate(MAX_FILENAME_LENGTH);
    }
    name
}
