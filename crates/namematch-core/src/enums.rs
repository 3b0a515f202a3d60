// Match classification labels

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which scoring rule produced a score.
///
/// Variants are listed in cascade priority order: when two names satisfy
/// several rules, the earliest variant here is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Normalized forms are identical.
    Exact,
    /// Core names (suffixes and fillers removed) are identical.
    CoreExact,
    /// The query core appears inside the candidate core.
    SearchInResult,
    /// The candidate core appears inside the query core.
    ResultInSearch,
    /// Most of the candidate's significant words are found in the query.
    WordMatch,
    /// Most of the query's significant words are found in the candidate.
    ReverseWordMatch,
    /// Edit-distance similarity of at least 0.85.
    FuzzyHigh,
    /// Edit-distance similarity of at least 0.70.
    FuzzyMedium,
    /// At least half of the significant words overlap.
    PartialOverlap,
    /// Nothing else applied.
    LowSimilarity,
}

impl MatchType {
    /// All variants in cascade order.
    pub const ALL: [MatchType; 10] = [
        MatchType::Exact,
        MatchType::CoreExact,
        MatchType::SearchInResult,
        MatchType::ResultInSearch,
        MatchType::WordMatch,
        MatchType::ReverseWordMatch,
        MatchType::FuzzyHigh,
        MatchType::FuzzyMedium,
        MatchType::PartialOverlap,
        MatchType::LowSimilarity,
    ];

    /// The snake_case label used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::CoreExact => "core_exact",
            MatchType::SearchInResult => "search_in_result",
            MatchType::ResultInSearch => "result_in_search",
            MatchType::WordMatch => "word_match",
            MatchType::ReverseWordMatch => "reverse_word_match",
            MatchType::FuzzyHigh => "fuzzy_high",
            MatchType::FuzzyMedium => "fuzzy_medium",
            MatchType::PartialOverlap => "partial_overlap",
            MatchType::LowSimilarity => "low_similarity",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_serde_names() {
        for mt in MatchType::ALL {
            let json = serde_json::to_string(&mt).unwrap();
            assert_eq!(json, format!("\"{}\"", mt.as_str()));
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(MatchType::CoreExact.to_string(), "core_exact");
        assert_eq!(MatchType::ReverseWordMatch.to_string(), "reverse_word_match");
    }

    #[test]
    fn deserialize_from_label() {
        let mt: MatchType = serde_json::from_str("\"fuzzy_medium\"").unwrap();
        assert_eq!(mt, MatchType::FuzzyMedium);
    }
}
