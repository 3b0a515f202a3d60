// Pairwise name scoring
//
// Compares a query-side name with a candidate-side name and classifies the
// relationship through the ordered rule table in `rules`.

pub mod pair;
pub mod rules;

use namematch_core::{MatchScore, MatchType};
use serde::Serialize;

use crate::vocabulary::Vocabulary;

pub use pair::{ScoringPair, levenshtein_similarity};
pub use rules::{RULES, ScoringRule};

/// Scores pairs of names against one vocabulary.
///
/// Cheap to construct and `Copy`; it only borrows the vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> Scorer<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Score query-side name `a` against candidate-side name `b`.
    ///
    /// Not symmetric: the containment rules weight the two directions
    /// differently.
    pub fn score(&self, a: &str, b: &str) -> MatchScore {
        let pair = ScoringPair::new(a, b, self.vocabulary);
        evaluate(&pair)
    }

    /// Score `a` against `b` and report every rule's verdict.
    pub fn score_with_trace(&self, a: &str, b: &str) -> ScoreTrace {
        let pair = ScoringPair::new(a, b, self.vocabulary);
        let verdicts = RULES
            .iter()
            .map(|rule| RuleVerdict {
                match_type: rule.match_type,
                score: (rule.apply)(&pair),
            })
            .collect();
        let result = evaluate(&pair);
        ScoreTrace {
            normalized_a: pair.normalized_a.clone(),
            normalized_b: pair.normalized_b.clone(),
            core_a: pair.core_a.clone(),
            core_b: pair.core_b.clone(),
            similarity: pair.similarity(),
            verdicts,
            result,
        }
    }
}

/// Run the cascade; the first rule that applies wins.
pub fn evaluate(pair: &ScoringPair) -> MatchScore {
    for rule in &RULES {
        if let Some(score) = (rule.apply)(pair) {
            return MatchScore::new(score.clamp(0.0, 1.0), rule.match_type);
        }
    }
    // The fallback rule always applies; kept for an exhaustive return.
    MatchScore::new(
        pair.similarity() * rules::LOW_SIMILARITY_FACTOR,
        MatchType::LowSimilarity,
    )
}

/// Outcome of a single rule for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleVerdict {
    pub match_type: MatchType,
    /// `None` if the rule did not apply.
    pub score: Option<f64>,
}

/// Every intermediate form and rule verdict for one pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTrace {
    pub normalized_a: String,
    pub normalized_b: String,
    pub core_a: String,
    pub core_b: String,
    pub similarity: f64,
    pub verdicts: Vec<RuleVerdict>,
    pub result: MatchScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(a: &str, b: &str) -> MatchScore {
        Scorer::new(&Vocabulary::default()).score(a, b)
    }

    #[test]
    fn self_match_is_exact() {
        for x in ["Acme", "St. Mary's", "LLC", "a", "\u{00C9}cole"] {
            let s = score(x, x);
            assert_eq!(s.score, 1.0, "{x}");
            assert_eq!(s.match_type, MatchType::Exact, "{x}");
        }
    }

    #[test]
    fn case_and_punctuation_are_exact() {
        let s = score("ACME ROOFING, LLC", "acme roofing llc");
        assert_eq!(s.match_type, MatchType::Exact);
    }

    #[test]
    fn containment_asymmetry() {
        let forward = score("acme", "acme roofing llc");
        let backward = score("acme roofing llc", "acme");
        assert_eq!(forward.match_type, MatchType::SearchInResult);
        assert_eq!(backward.match_type, MatchType::ResultInSearch);
        assert_ne!(forward.score, backward.score);
        assert!(forward.score > 0.85);
        assert!(backward.score > 0.85);
    }

    #[test]
    fn first_rule_wins() {
        // cores are equal and also contain each other; core_exact is reported
        let s = score("Acme Roofing", "Acme Roofing Inc");
        assert_eq!(s.match_type, MatchType::CoreExact);
    }

    #[test]
    fn inverted_article_listing_is_core_exact() {
        let s = score("Acme", "Acme Company, The");
        assert_eq!(s.match_type, MatchType::CoreExact);
        assert!(s.score >= 0.95);
    }

    #[test]
    fn unrelated_names_score_low() {
        let s = score("XYZ", "Unrelated Co");
        assert_eq!(s.match_type, MatchType::LowSimilarity);
        assert!(s.score < 0.5);
    }

    #[test]
    fn empty_inputs_are_total() {
        let s = score("", "");
        assert_eq!(s.match_type, MatchType::LowSimilarity);
        assert_eq!(s.score, 0.5);
        assert_eq!(score("", "Acme").score, 0.0);
        assert_eq!(score("Acme", "").score, 0.0);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let names = ["Acme", "Acme Roofing LLC", "", "x", "Roofing Acme", "acme roofs"];
        for a in names {
            for b in names {
                let s = score(a, b);
                assert!((0.0..=1.0).contains(&s.score), "{a:?} {b:?} {s:?}");
            }
        }
    }

    #[test]
    fn trace_reports_every_rule() {
        let vocabulary = Vocabulary::default();
        let scorer = Scorer::new(&vocabulary);
        let trace = scorer.score_with_trace("Acme", "Acme Roofing LLC");
        assert_eq!(trace.verdicts.len(), RULES.len());
        assert_eq!(trace.core_b, "acme roofing");
        assert_eq!(trace.result.match_type, MatchType::SearchInResult);
        // the first applying verdict is the result
        let first = trace.verdicts.iter().find(|v| v.score.is_some()).unwrap();
        assert_eq!(first.match_type, trace.result.match_type);
        // the fallback always applies
        assert!(trace.verdicts.last().unwrap().score.is_some());
    }
}
