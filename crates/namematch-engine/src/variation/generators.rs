// Individual variation generators: each applies one rewriting rule to the
// query name and adds what it produces to the set.

use crate::normalizer::{normalize, words};
use crate::suffix::strip_normalized;
use crate::vocabulary::Vocabulary;

use super::set::VariationSet;

/// Minimum number of multi-letter core words before truncated prefixes
/// are generated (strictly more than this).
const PREFIX_MIN_WORDS: usize = 3;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The query name in the forms every generator works from, computed once.
#[derive(Debug, Clone)]
pub struct VariationInput<'a> {
    /// The name as given, trimmed.
    pub original: &'a str,
    pub normalized: String,
    pub core: String,
    pub vocabulary: &'a Vocabulary,
}

impl<'a> VariationInput<'a> {
    pub fn new(name: &'a str, vocabulary: &'a Vocabulary) -> Self {
        let normalized = normalize(name);
        let core = strip_normalized(&normalized, vocabulary);
        Self {
            original: name.trim(),
            normalized,
            core,
            vocabulary,
        }
    }

    /// Words of the core name.
    pub fn core_words(&self) -> Vec<&str> {
        words(&self.core).collect()
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One rewriting rule.
///
/// Generators must be deterministic: the same input always adds the same
/// strings in the same order.
pub trait VariationGenerator: Send + Sync {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    fn generate(&self, input: &VariationInput<'_>, set: &mut VariationSet);
}

// =========================================================================
// Individual generators
// =========================================================================

/// The name exactly as given (trimmed, casing untouched).
pub struct Original;

impl VariationGenerator for Original {
    fn name(&self) -> &'static str {
        "original"
    }

    fn generate(&self, input: &VariationInput<'_>, set: &mut VariationSet) {
        set.add(input.original);
    }
}

/// The normalized name.
pub struct Normalized;

impl VariationGenerator for Normalized {
    fn name(&self) -> &'static str {
        "normalized"
    }

    fn generate(&self, input: &VariationInput<'_>, set: &mut VariationSet) {
        set.add(&input.normalized);
    }
}

/// The core name alone.
pub struct Core;

impl VariationGenerator for Core {
    fn name(&self) -> &'static str {
        "core"
    }

    fn generate(&self, input: &VariationInput<'_>, set: &mut VariationSet) {
        set.add(&input.core);
    }
}

/// The core name followed by each common suffix token, both space-joined
/// (`acme LLC`) and comma-joined (`acme, LLC`) the way directories
/// render them.
pub struct CoreWithSuffixes;

impl VariationGenerator for CoreWithSuffixes {
    fn name(&self) -> &'static str {
        "core_with_suffixes"
    }

    fn generate(&self, input: &VariationInput<'_>, set: &mut VariationSet) {
        if input.core.is_empty() {
            return;
        }
        for token in input.vocabulary.common_suffixes() {
            set.add(&format!("{} {}", input.core, token));
            set.add(&format!("{}, {}", input.core, token));
        }
    }
}

/// Swap the word `and` for `&`, and `&` for `and`.
///
/// Works on the original name: normalization drops `&` and the stripper
/// drops `and`, so neither survives into the core.
pub struct AmpersandSwap;

impl VariationGenerator for AmpersandSwap {
    fn name(&self) -> &'static str {
        "ampersand_swap"
    }

    fn generate(&self, input: &VariationInput<'_>, set: &mut VariationSet) {
        let tokens: Vec<&str> = input.original.split_whitespace().collect();
        if tokens.iter().any(|t| t.eq_ignore_ascii_case("and")) {
            let swapped: Vec<&str> = tokens
                .iter()
                .map(|t| if t.eq_ignore_ascii_case("and") { "&" } else { *t })
                .collect();
            set.add(&swapped.join(" "));
        }
        if input.original.contains('&') {
            let spelled = input.original.replace('&', " and ");
            set.add(&spelled.split_whitespace().collect::<Vec<_>>().join(" "));
        }
    }
}

/// Expand or contract whole-word abbreviations in the core name
/// (`st` to `saint`, `mount` to `mt`, ...). Each vocabulary pair that
/// applies yields its own variation.
pub struct Abbreviations;

impl VariationGenerator for Abbreviations {
    fn name(&self) -> &'static str {
        "abbreviations"
    }

    fn generate(&self, input: &VariationInput<'_>, set: &mut VariationSet) {
        let core_words = input.core_words();
        if core_words.is_empty() {
            return;
        }
        for (full, abbr) in input.vocabulary.abbreviations() {
            if core_words.contains(&full.as_str()) {
                set.add(&replace_word(&core_words, full, abbr));
            }
            if core_words.contains(&abbr.as_str()) {
                set.add(&replace_word(&core_words, abbr, full));
            }
        }
    }
}

fn replace_word(words: &[&str], from: &str, to: &str) -> String {
    words
        .iter()
        .map(|w| if *w == from { to } else { *w })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First-two and first-three word prefixes of long core names, for
/// directories that truncate listings. Single-letter words are ignored
/// both for counting and for building the prefixes.
pub struct TruncatedPrefixes;

impl VariationGenerator for TruncatedPrefixes {
    fn name(&self) -> &'static str {
        "truncated_prefixes"
    }

    fn generate(&self, input: &VariationInput<'_>, set: &mut VariationSet) {
        let long_words: Vec<&str> = input
            .core_words()
            .into_iter()
            .filter(|w| w.chars().count() > 1)
            .collect();
        if long_words.len() <= PREFIX_MIN_WORDS {
            return;
        }
        set.add(&long_words[..2].join(" "));
        set.add(&long_words[..3].join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(generator: &dyn VariationGenerator, name: &str) -> Vec<String> {
        let vocabulary = Vocabulary::default();
        let input = VariationInput::new(name, &vocabulary);
        let mut set = VariationSet::new(64);
        generator.generate(&input, &mut set);
        set.into_vec()
    }

    #[test]
    fn input_forms() {
        let vocabulary = Vocabulary::default();
        let input = VariationInput::new("  The Acme Roofing, LLC ", &vocabulary);
        assert_eq!(input.original, "The Acme Roofing, LLC");
        assert_eq!(input.normalized, "the acme roofing llc");
        assert_eq!(input.core, "acme roofing");
        assert_eq!(input.core_words(), vec!["acme", "roofing"]);
    }

    #[test]
    fn original_keeps_casing() {
        assert_eq!(run(&Original, " Acme LLC "), vec!["Acme LLC"]);
    }

    #[test]
    fn normalized_and_core() {
        assert_eq!(run(&Normalized, "Acme, LLC"), vec!["acme llc"]);
        assert_eq!(run(&Core, "Acme, LLC"), vec!["acme"]);
        assert!(run(&Core, "LLC").is_empty());
    }

    #[test]
    fn core_with_suffixes() {
        let got = run(&CoreWithSuffixes, "Acme Roofing");
        assert_eq!(got.len(), 12);
        assert_eq!(got[0], "acme roofing LLC");
        assert_eq!(got[1], "acme roofing, LLC");
        assert!(got.contains(&"acme roofing, Inc.".to_string()));
        assert!(got.contains(&"acme roofing Co".to_string()));
    }

    #[test]
    fn core_with_suffixes_skips_empty_core() {
        assert!(run(&CoreWithSuffixes, "Inc.").is_empty());
    }

    #[test]
    fn ampersand_swap_both_directions() {
        assert_eq!(run(&AmpersandSwap, "Smith and Sons"), vec!["Smith & Sons"]);
        assert_eq!(run(&AmpersandSwap, "Smith AND Sons"), vec!["Smith & Sons"]);
        assert_eq!(run(&AmpersandSwap, "Smith & Sons"), vec!["Smith and Sons"]);
        assert_eq!(run(&AmpersandSwap, "Smith&Sons"), vec!["Smith and Sons"]);
        assert!(run(&AmpersandSwap, "Andover Sandwiches").is_empty());
    }

    #[test]
    fn abbreviations_both_directions() {
        assert_eq!(
            run(&Abbreviations, "St. Mary's Construction"),
            vec!["saint mary s construction"]
        );
        assert_eq!(
            run(&Abbreviations, "Saint Marys Construction Inc"),
            vec!["st marys construction"]
        );
        assert_eq!(run(&Abbreviations, "Mount Doctor"), vec!["mt doctor", "mount dr"]);
    }

    #[test]
    fn abbreviations_whole_words_only() {
        assert!(run(&Abbreviations, "Stone Masonry").is_empty());
        assert!(run(&Abbreviations, "Drywall Pros").is_empty());
    }

    #[test]
    fn truncated_prefixes_for_long_names() {
        assert_eq!(
            run(&TruncatedPrefixes, "Greater Boston Roofing Siding Co"),
            vec!["greater boston", "greater boston roofing"]
        );
    }

    #[test]
    fn truncated_prefixes_need_four_long_words() {
        assert!(run(&TruncatedPrefixes, "Boston Roofing Siding").is_empty());
        // single letters do not count
        assert!(run(&TruncatedPrefixes, "J B Boston Roofing Siding").is_empty());
        assert_eq!(
            run(&TruncatedPrefixes, "J Boston North Roofing Siding"),
            vec!["boston north", "boston north roofing"]
        );
    }
}
