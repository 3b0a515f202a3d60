// Per-pair derived forms, computed once and shared by every rule

use std::cell::OnceCell;

use crate::normalizer::{normalize, words};
use crate::suffix::strip_normalized;
use crate::vocabulary::Vocabulary;

/// Words this long or shorter never count as significant.
const SIGNIFICANT_WORD_MIN_CHARS: usize = 3;

/// Normalized/core forms and significant words of the two names being
/// compared. `a` is the query side, `b` the candidate side.
#[derive(Debug)]
pub struct ScoringPair {
    pub normalized_a: String,
    pub normalized_b: String,
    pub core_a: String,
    pub core_b: String,
    pub significant_a: Vec<String>,
    pub significant_b: Vec<String>,
    similarity: OnceCell<f64>,
}

impl ScoringPair {
    pub fn new(a: &str, b: &str, vocabulary: &Vocabulary) -> Self {
        let normalized_a = normalize(a);
        let normalized_b = normalize(b);
        let core_a = strip_normalized(&normalized_a, vocabulary);
        let core_b = strip_normalized(&normalized_b, vocabulary);
        let significant_a = significant_words(&core_a, vocabulary);
        let significant_b = significant_words(&core_b, vocabulary);
        Self {
            normalized_a,
            normalized_b,
            core_a,
            core_b,
            significant_a,
            significant_b,
            similarity: OnceCell::new(),
        }
    }

    /// Both core names have content.
    pub fn cores_present(&self) -> bool {
        !self.core_a.is_empty() && !self.core_b.is_empty()
    }

    /// Levenshtein similarity of the two core names, computed on first use.
    pub fn similarity(&self) -> f64 {
        *self
            .similarity
            .get_or_init(|| levenshtein_similarity(&self.core_a, &self.core_b))
    }
}

/// `1 - editDistance / max(len)`, over characters. Two empty strings are
/// fully similar.
pub fn levenshtein_similarity(x: &str, y: &str) -> f64 {
    strsim::normalized_levenshtein(x, y)
}

/// Words longer than two characters that are not fillers.
pub fn significant_words(core: &str, vocabulary: &Vocabulary) -> Vec<String> {
    words(core)
        .filter(|w| w.chars().count() >= SIGNIFICANT_WORD_MIN_CHARS && !vocabulary.is_filler(w))
        .map(str::to_string)
        .collect()
}

/// Two words are related if they are equal or one contains the other
/// (`road` and `roads`).
pub fn words_related(x: &str, y: &str) -> bool {
    x.contains(y) || y.contains(x)
}

/// How many of `needles` are related to at least one of `haystack`.
pub fn related_count(needles: &[String], haystack: &[String]) -> usize {
    needles
        .iter()
        .filter(|n| haystack.iter().any(|h| words_related(n, h)))
        .count()
}

/// Number of characters, the unit every length ratio is taken in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_forms() {
        let v = Vocabulary::default();
        let pair = ScoringPair::new("The Acme Roofing", "ACME ROOFING, LLC", &v);
        assert_eq!(pair.normalized_a, "the acme roofing");
        assert_eq!(pair.normalized_b, "acme roofing llc");
        assert_eq!(pair.core_a, "acme roofing");
        assert_eq!(pair.core_b, "acme roofing");
        assert_eq!(pair.significant_a, vec!["acme", "roofing"]);
        assert!(pair.cores_present());
        assert_eq!(pair.similarity(), 1.0);
    }

    #[test]
    fn similarity_basics() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("abc", ""), 0.0);
        assert_eq!(levenshtein_similarity("kitten", "sitting"), 1.0 - 3.0 / 7.0);
        assert_eq!(levenshtein_similarity("abcd", "abcd"), 1.0);
    }

    #[test]
    fn similarity_counts_characters() {
        // one substitution over four characters, even with multi-byte text
        assert_eq!(levenshtein_similarity("caf\u{00E9}", "cafe"), 0.75);
    }

    #[test]
    fn significant_words_skip_short() {
        let v = Vocabulary::default();
        assert_eq!(significant_words("j b hunt co op", &v), vec!["hunt"]);
        assert!(significant_words("", &v).is_empty());
    }

    #[test]
    fn related_words() {
        assert!(words_related("road", "roads"));
        assert!(words_related("roads", "road"));
        assert!(words_related("acme", "acme"));
        assert!(!words_related("acme", "apex"));
    }

    #[test]
    fn related_counting() {
        let a: Vec<String> = ["mary", "construction"].map(String::from).to_vec();
        let b: Vec<String> = ["saint", "marys", "construction"].map(String::from).to_vec();
        assert_eq!(related_count(&b, &a), 2);
        assert_eq!(related_count(&a, &b), 2);
    }
}
