// The scoring cascade as a rule table
//
// Rules are evaluated top to bottom and the first one that applies decides
// both the score and the match type. Each rule is a plain function over a
// precomputed `ScoringPair`, so rules can be tested one at a time.
//
// The cascade is deliberately asymmetric: a short query found inside a
// longer candidate (`search_in_result`) is weighted differently from the
// reverse (`result_in_search`).

use namematch_core::MatchType;

use super::pair::{ScoringPair, char_len, related_count};

pub const CORE_EXACT_BASE: f64 = 0.95;
pub const CORE_EXACT_SPAN: f64 = 0.03;
pub const CONTAINMENT_BASE: f64 = 0.85;
pub const SEARCH_IN_RESULT_WEIGHT: f64 = 0.08;
pub const RESULT_IN_SEARCH_WEIGHT: f64 = 0.10;
pub const WORD_MATCH_SCORE: f64 = 0.85;
pub const REVERSE_WORD_MATCH_SCORE: f64 = 0.82;
pub const FUZZY_HIGH_THRESHOLD: f64 = 0.85;
pub const FUZZY_HIGH_FACTOR: f64 = 0.95;
pub const FUZZY_MEDIUM_THRESHOLD: f64 = 0.70;
pub const FUZZY_MEDIUM_FACTOR: f64 = 0.90;
pub const PARTIAL_OVERLAP_BASE: f64 = 0.60;
pub const PARTIAL_OVERLAP_WEIGHT: f64 = 0.25;
pub const LOW_SIMILARITY_FACTOR: f64 = 0.5;

/// Word-match rules need this share of words related: 4/5.
const WORD_MATCH_NUMERATOR: usize = 4;
const WORD_MATCH_DENOMINATOR: usize = 5;

/// One entry of the cascade.
#[derive(Clone, Copy)]
pub struct ScoringRule {
    pub match_type: MatchType,
    /// Returns the score if the rule applies to the pair.
    pub apply: fn(&ScoringPair) -> Option<f64>,
}

impl std::fmt::Debug for ScoringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringRule")
            .field("match_type", &self.match_type)
            .finish()
    }
}

const fn rule(match_type: MatchType, apply: fn(&ScoringPair) -> Option<f64>) -> ScoringRule {
    ScoringRule { match_type, apply }
}

/// The cascade, highest priority first. The last rule always applies.
pub const RULES: [ScoringRule; 10] = [
    rule(MatchType::Exact, exact),
    rule(MatchType::CoreExact, core_exact),
    rule(MatchType::SearchInResult, search_in_result),
    rule(MatchType::ResultInSearch, result_in_search),
    rule(MatchType::WordMatch, word_match),
    rule(MatchType::ReverseWordMatch, reverse_word_match),
    rule(MatchType::FuzzyHigh, fuzzy_high),
    rule(MatchType::FuzzyMedium, fuzzy_medium),
    rule(MatchType::PartialOverlap, partial_overlap),
    rule(MatchType::LowSimilarity, low_similarity),
];

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Normalized names are identical (and not empty).
pub fn exact(pair: &ScoringPair) -> Option<f64> {
    (!pair.normalized_a.is_empty() && pair.normalized_a == pair.normalized_b).then_some(1.0)
}

/// Core names are identical. Scores 0.95 to 0.98, higher the closer the
/// normalized lengths are, so `Acme LLC` vs `Acme Inc` ranks above
/// `Acme` vs `The Acme Company`.
pub fn core_exact(pair: &ScoringPair) -> Option<f64> {
    if !pair.cores_present() || pair.core_a != pair.core_b {
        return None;
    }
    let la = char_len(&pair.normalized_a);
    let lb = char_len(&pair.normalized_b);
    let ratio = la.min(lb) as f64 / la.max(lb) as f64;
    Some(CORE_EXACT_BASE + CORE_EXACT_SPAN * ratio)
}

/// The query core is a substring of the candidate core.
pub fn search_in_result(pair: &ScoringPair) -> Option<f64> {
    if !pair.cores_present() || !pair.core_b.contains(pair.core_a.as_str()) {
        return None;
    }
    let ratio = char_len(&pair.core_a) as f64 / char_len(&pair.core_b) as f64;
    Some(CONTAINMENT_BASE + SEARCH_IN_RESULT_WEIGHT * ratio)
}

/// The candidate core is a substring of the query core.
pub fn result_in_search(pair: &ScoringPair) -> Option<f64> {
    if !pair.cores_present() || !pair.core_a.contains(pair.core_b.as_str()) {
        return None;
    }
    let ratio = char_len(&pair.core_b) as f64 / char_len(&pair.core_a) as f64;
    Some(CONTAINMENT_BASE + RESULT_IN_SEARCH_WEIGHT * ratio)
}

/// At least 80% of the candidate's significant words relate to a query word.
pub fn word_match(pair: &ScoringPair) -> Option<f64> {
    mostly_covered(&pair.significant_b, &pair.significant_a).then_some(WORD_MATCH_SCORE)
}

/// At least 80% of the query's significant words relate to a candidate word.
pub fn reverse_word_match(pair: &ScoringPair) -> Option<f64> {
    mostly_covered(&pair.significant_a, &pair.significant_b).then_some(REVERSE_WORD_MATCH_SCORE)
}

fn mostly_covered(needles: &[String], haystack: &[String]) -> bool {
    if needles.is_empty() || haystack.is_empty() {
        return false;
    }
    let related = related_count(needles, haystack);
    related * WORD_MATCH_DENOMINATOR >= needles.len() * WORD_MATCH_NUMERATOR
}

pub fn fuzzy_high(pair: &ScoringPair) -> Option<f64> {
    if !pair.cores_present() {
        return None;
    }
    let similarity = pair.similarity();
    (similarity >= FUZZY_HIGH_THRESHOLD).then(|| similarity * FUZZY_HIGH_FACTOR)
}

pub fn fuzzy_medium(pair: &ScoringPair) -> Option<f64> {
    if !pair.cores_present() {
        return None;
    }
    let similarity = pair.similarity();
    (similarity >= FUZZY_MEDIUM_THRESHOLD).then(|| similarity * FUZZY_MEDIUM_FACTOR)
}

/// At least half of the significant words overlap. The ratio is taken over
/// the larger of the two word lists.
pub fn partial_overlap(pair: &ScoringPair) -> Option<f64> {
    let (a, b) = (&pair.significant_a, &pair.significant_b);
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let overlap = related_count(a, b);
    let total = a.len().max(b.len());
    if overlap * 2 < total {
        return None;
    }
    Some(PARTIAL_OVERLAP_BASE + PARTIAL_OVERLAP_WEIGHT * (overlap as f64 / total as f64))
}

/// Fallback: half the core similarity.
pub fn low_similarity(pair: &ScoringPair) -> Option<f64> {
    Some(pair.similarity() * LOW_SIMILARITY_FACTOR)
}
