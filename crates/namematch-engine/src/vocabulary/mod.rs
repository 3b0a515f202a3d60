// Vocabulary: legal suffixes, filler words, suffix tokens and abbreviations
//
// A `Vocabulary` is built once and then only read. The engine never keeps
// one in a global; every component borrows the vocabulary it was handed,
// so several matchers with different vocabularies can coexist.

pub mod tables;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::normalizer::{normalize, words};

pub use tables::{ABBREVIATIONS, COMMON_SUFFIX_TOKENS, FILLER_WORDS, LEGAL_SUFFIXES};

/// Error type for vocabulary loading failures.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// The vocabulary file is not valid JSON or has the wrong shape.
    #[error("failed to parse vocabulary: {0}")]
    Parse(#[from] serde_json::Error),

    /// A legal suffix consists only of separators.
    #[error("legal suffix {0:?} is empty after normalization")]
    EmptySuffix(String),

    /// An abbreviation side is empty or spans several words.
    #[error("abbreviation {0:?} must be a single word")]
    InvalidAbbreviation(String),

    /// A common suffix token is blank.
    #[error("common suffix token must not be blank")]
    BlankSuffixToken,
}

/// Immutable word tables consulted by the stripper, the variation
/// generators and the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    /// Normalized suffix phrases as word sequences, longest first.
    suffixes: Vec<Vec<String>>,
    fillers: HashSet<String>,
    common_suffixes: Vec<String>,
    abbreviations: Vec<(String, String)>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_tables(
            LEGAL_SUFFIXES.iter().copied(),
            FILLER_WORDS.iter().copied(),
            COMMON_SUFFIX_TOKENS.iter().copied(),
            ABBREVIATIONS.iter().copied(),
        )
    }
}

impl Vocabulary {
    /// Build a vocabulary from raw tables.
    ///
    /// Suffix phrases, filler words and abbreviations are normalized;
    /// entries that normalize to nothing are dropped. Suffix phrases are
    /// deduplicated and ordered by word count, then character length, both
    /// descending, so a multi-word phrase is always tried before any
    /// shorter phrase it ends with.
    pub fn from_tables<'s>(
        legal_suffixes: impl IntoIterator<Item = &'s str>,
        filler_words: impl IntoIterator<Item = &'s str>,
        common_suffixes: impl IntoIterator<Item = &'s str>,
        abbreviations: impl IntoIterator<Item = (&'s str, &'s str)>,
    ) -> Self {
        let mut seen = HashSet::new();
        let mut suffixes: Vec<Vec<String>> = Vec::new();
        for raw in legal_suffixes {
            let phrase = normalize(raw);
            if phrase.is_empty() || !seen.insert(phrase.clone()) {
                continue;
            }
            suffixes.push(words(&phrase).map(str::to_string).collect());
        }
        suffixes.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| phrase_chars(b).cmp(&phrase_chars(a)))
        });

        let fillers = filler_words
            .into_iter()
            .map(normalize)
            .filter(|w| !w.is_empty())
            .collect();

        let common_suffixes = common_suffixes
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let abbreviations = abbreviations
            .into_iter()
            .map(|(full, abbr)| (normalize(full), normalize(abbr)))
            .filter(|(full, abbr)| !full.is_empty() && !abbr.is_empty())
            .collect();

        Self {
            suffixes,
            fillers,
            common_suffixes,
            abbreviations,
        }
    }

    /// Parse a vocabulary file and build the vocabulary it describes.
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let file: VocabularyFile = serde_json::from_str(json)?;
        file.into_vocabulary()
    }

    /// Suffix phrases as word sequences, in matching order.
    pub fn suffix_phrases(&self) -> &[Vec<String>] {
        &self.suffixes
    }

    /// Returns `true` if `word` (already normalized) is a filler word.
    pub fn is_filler(&self, word: &str) -> bool {
        self.fillers.contains(word)
    }

    /// Suffix tokens appended to core names when generating variations.
    pub fn common_suffixes(&self) -> &[String] {
        &self.common_suffixes
    }

    /// Normalized `(full, abbreviated)` pairs.
    pub fn abbreviations(&self) -> &[(String, String)] {
        &self.abbreviations
    }
}

fn phrase_chars(phrase: &[String]) -> usize {
    phrase.iter().map(|w| w.chars().count()).sum()
}

// ---------------------------------------------------------------------------
// Vocabulary file
// ---------------------------------------------------------------------------

/// On-disk vocabulary description.
///
/// Each table is optional. A missing table keeps the built-in default. A
/// present table replaces the default, or is appended to it when `extend`
/// is set.
///
/// ```json
/// { "extend": true, "legalSuffixes": ["gmbh", "s.a."], "abbreviations": [["brothers", "bros"]] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct VocabularyFile {
    pub extend: bool,
    pub legal_suffixes: Option<Vec<String>>,
    pub filler_words: Option<Vec<String>>,
    pub common_suffixes: Option<Vec<String>>,
    pub abbreviations: Option<Vec<(String, String)>>,
}

impl VocabularyFile {
    /// Check every user-supplied entry.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        for raw in self.legal_suffixes.iter().flatten() {
            if normalize(raw).is_empty() {
                return Err(VocabularyError::EmptySuffix(raw.clone()));
            }
        }
        for token in self.common_suffixes.iter().flatten() {
            if token.trim().is_empty() {
                return Err(VocabularyError::BlankSuffixToken);
            }
        }
        for (full, abbr) in self.abbreviations.iter().flatten() {
            for side in [full, abbr] {
                if words(&normalize(side)).count() != 1 {
                    return Err(VocabularyError::InvalidAbbreviation(side.clone()));
                }
            }
        }
        Ok(())
    }

    /// Validate and merge with the built-in tables.
    pub fn into_vocabulary(self) -> Result<Vocabulary, VocabularyError> {
        self.validate()?;
        let extend = self.extend;

        let legal_suffixes = merge(extend, LEGAL_SUFFIXES, self.legal_suffixes);
        let filler_words = merge(extend, FILLER_WORDS, self.filler_words);
        let common_suffixes = merge(extend, COMMON_SUFFIX_TOKENS, self.common_suffixes);
        let abbreviations: Vec<(String, String)> = match self.abbreviations {
            None => owned_pairs(ABBREVIATIONS),
            Some(user) if extend => {
                let mut all = owned_pairs(ABBREVIATIONS);
                all.extend(user);
                all
            }
            Some(user) => user,
        };

        Ok(Vocabulary::from_tables(
            legal_suffixes.iter().map(String::as_str),
            filler_words.iter().map(String::as_str),
            common_suffixes.iter().map(String::as_str),
            abbreviations.iter().map(|(f, a)| (f.as_str(), a.as_str())),
        ))
    }
}

fn merge(extend: bool, defaults: &[&str], user: Option<Vec<String>>) -> Vec<String> {
    let defaults = defaults.iter().map(|s| s.to_string());
    match user {
        None => defaults.collect(),
        Some(user) if extend => defaults.chain(user).collect(),
        Some(user) => user,
    }
}

fn owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(f, a)| (f.to_string(), a.to_string()))
        .collect()
}
