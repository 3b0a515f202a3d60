// Text normalization: lowercase, separators to single spaces, trimmed

use namematch_core::character::is_separator;

/// Canonicalize raw name text.
///
/// Lowercases every character, replaces each separator (the fixed
/// punctuation set and all whitespace) with a space, collapses runs of
/// spaces and trims both ends. Empty or whitespace-only input yields an
/// empty string.
///
/// The output contains no separators other than single inner spaces, so
/// normalizing it again returns it unchanged.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if is_separator(c) {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Split normalized text into its words.
///
/// Tolerates text that was not normalized: any separator run counts as
/// one boundary and empty pieces are skipped.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(is_separator).filter(|w| !w.is_empty())
}
