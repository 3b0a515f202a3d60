// Legal suffix and filler word removal

use crate::normalizer::{normalize, words};
use crate::vocabulary::Vocabulary;

/// Reduce a name to its core: trailing legal suffixes removed, then filler
/// words removed anywhere.
///
/// Suffixes only match whole words at the end of the name. Removal repeats
/// until no suffix phrase or filler ends the name, so `acme holdings llc`
/// loses both `llc` and `holdings`, and `Acme Company, The` becomes
/// `acme`. The input is normalized first; normalized input passes through
/// unchanged, which makes matching case-insensitive.
///
/// The result may be empty when the name consisted only of suffixes and
/// fillers.
pub fn strip_suffixes(text: &str, vocabulary: &Vocabulary) -> String {
    let normalized = normalize(text);
    strip_normalized(&normalized, vocabulary)
}

/// The core name of raw text. Same as [`strip_suffixes`]; named for call
/// sites that start from raw input.
pub fn core_name(text: &str, vocabulary: &Vocabulary) -> String {
    strip_suffixes(text, vocabulary)
}

/// [`strip_suffixes`] for text already known to be normalized.
pub(crate) fn strip_normalized(normalized: &str, vocabulary: &Vocabulary) -> String {
    let mut tokens: Vec<&str> = words(normalized).collect();

    // A trailing filler can hide a suffix (`acme company the`), so both
    // are peeled off the end until neither matches.
    loop {
        if tokens.last().is_some_and(|w| vocabulary.is_filler(w)) {
            tokens.pop();
        } else if let Some(len) = trailing_suffix_len(&tokens, vocabulary) {
            tokens.truncate(tokens.len() - len);
        } else {
            break;
        }
    }

    tokens.retain(|w| !vocabulary.is_filler(w));
    tokens.join(" ")
}

/// Word count of the first suffix phrase (in vocabulary order) that ends
/// `tokens`.
fn trailing_suffix_len(tokens: &[&str], vocabulary: &Vocabulary) -> Option<usize> {
    vocabulary
        .suffix_phrases()
        .iter()
        .find(|phrase| ends_with_phrase(tokens, phrase))
        .map(Vec::len)
}

fn ends_with_phrase(tokens: &[&str], phrase: &[String]) -> bool {
    if phrase.is_empty() || phrase.len() > tokens.len() {
        return false;
    }
    let tail = &tokens[tokens.len() - phrase.len()..];
    tail.iter().zip(phrase).all(|(t, p)| *t == p.as_str())
}
