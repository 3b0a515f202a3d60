// Scores and resolution outcomes

use serde::Serialize;

use crate::enums::MatchType;

/// Score for one pair of names, with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    /// Similarity in `[0, 1]`.
    pub score: f64,
    pub match_type: MatchType,
}

impl MatchScore {
    pub fn new(score: f64, match_type: MatchType) -> Self {
        Self { score, match_type }
    }
}

/// The best score found for one candidate across all query variations.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a, C> {
    /// Position of the candidate in the caller's input.
    pub index: usize,
    pub candidate: &'a C,
    pub score: f64,
    pub match_type: MatchType,
    /// The query variation that produced `score`. `None` when the query
    /// had no usable variations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
}

// Manual impl: derive would demand `C: Clone` for a borrowed field.
impl<C> Clone for MatchResult<'_, C> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            candidate: self.candidate,
            score: self.score,
            match_type: self.match_type,
            variation: self.variation.clone(),
        }
    }
}

/// Result of resolving one query against a candidate list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionOutcome<'a, C> {
    /// The top candidate, present only if its score reached `min_score`.
    pub best_match: Option<MatchResult<'a, C>>,
    /// Every candidate's best result, sorted by score descending. Ties keep
    /// the caller's input order.
    pub all_results: Vec<MatchResult<'a, C>>,
    /// The threshold `best_match` was gated on.
    pub min_score: f64,
}

impl<C> Clone for ResolutionOutcome<'_, C> {
    fn clone(&self) -> Self {
        Self {
            best_match: self.best_match.clone(),
            all_results: self.all_results.clone(),
            min_score: self.min_score,
        }
    }
}

impl<'a, C> ResolutionOutcome<'a, C> {
    /// An outcome with no candidates at all.
    pub fn empty(min_score: f64) -> Self {
        Self {
            best_match: None,
            all_results: Vec::new(),
            min_score,
        }
    }

    /// Returns `true` if some candidate cleared the threshold.
    pub fn is_match(&self) -> bool {
        self.best_match.is_some()
    }

    /// Highest score in the table, matched or not.
    pub fn best_score(&self) -> Option<f64> {
        self.all_results.first().map(|r| r.score)
    }

    /// The `n` highest-scoring rows, for "closest candidates" diagnostics
    /// when nothing cleared the threshold.
    pub fn closest(&self, n: usize) -> &[MatchResult<'a, C>] {
        &self.all_results[..n.min(self.all_results.len())]
    }

    /// Consume the outcome, keeping only the matched candidate.
    pub fn into_best_candidate(self) -> Option<&'a C> {
        self.best_match.map(|m| m.candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result<'a>(index: usize, candidate: &'a String, score: f64) -> MatchResult<'a, String> {
        MatchResult {
            index,
            candidate,
            score,
            match_type: MatchType::LowSimilarity,
            variation: None,
        }
    }

    #[test]
    fn empty_outcome() {
        let outcome: ResolutionOutcome<'_, String> = ResolutionOutcome::empty(0.65);
        assert!(!outcome.is_match());
        assert_eq!(outcome.best_score(), None);
        assert!(outcome.closest(3).is_empty());
    }

    #[test]
    fn closest_is_clamped() {
        let a = "a".to_string();
        let b = "b".to_string();
        let outcome = ResolutionOutcome {
            best_match: None,
            all_results: vec![result(1, &b, 0.5), result(0, &a, 0.4)],
            min_score: 0.65,
        };
        assert_eq!(outcome.closest(1).len(), 1);
        assert_eq!(outcome.closest(10).len(), 2);
        assert_eq!(outcome.best_score(), Some(0.5));
    }

    #[test]
    fn serializes_camel_case() {
        let a = "Acme".to_string();
        let r = result(0, &a, 1.0);
        let outcome = ResolutionOutcome {
            best_match: Some(r.clone()),
            all_results: vec![r],
            min_score: 0.65,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["bestMatch"]["candidate"], "Acme");
        assert_eq!(json["bestMatch"]["matchType"], "low_similarity");
        assert_eq!(json["allResults"].as_array().unwrap().len(), 1);
        assert!(json["bestMatch"].get("variation").is_none());
    }

    #[test]
    fn into_best_candidate() {
        let a = "Acme".to_string();
        let outcome = ResolutionOutcome {
            best_match: Some(result(0, &a, 0.9)),
            all_results: vec![result(0, &a, 0.9)],
            min_score: 0.65,
        };
        assert_eq!(outcome.into_best_candidate(), Some(&a));
    }
}
