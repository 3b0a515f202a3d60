// Best-match selection across all candidates and all query variations

use namematch_core::{Candidate, MatchResult, MatchScore, MatchType, ResolutionOutcome};
use tracing::{debug, trace};

use crate::scorer::Scorer;

/// Default score a candidate must reach to be reported as the match.
pub const DEFAULT_MIN_SCORE: f64 = 0.65;

/// Candidate count from which scoring is spread across threads when the
/// `parallel` feature is enabled.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Per-call selection options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveOptions {
    pub min_score: f64,
    pub parallel_threshold: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// The best score for one display name over all variations, with the index
/// of the variation that produced it.
///
/// Only a strictly higher score replaces the running best, so among equal
/// scores the earliest variation wins. With no variations the candidate
/// scores zero.
pub fn best_for_candidate(
    scorer: &Scorer<'_>,
    variations: &[String],
    display_name: &str,
) -> (MatchScore, Option<usize>) {
    let mut best: Option<(MatchScore, usize)> = None;
    for (i, variation) in variations.iter().enumerate() {
        let score = scorer.score(variation, display_name);
        if best.is_none_or(|(b, _)| score.score > b.score) {
            best = Some((score, i));
        }
    }
    match best {
        Some((score, i)) => (score, Some(i)),
        None => (MatchScore::new(0.0, MatchType::LowSimilarity), None),
    }
}

/// Score every candidate against every variation and pick the winner.
///
/// Every candidate gets a row in `all_results`, sorted by score descending
/// with ties kept in input order. `best_match` is the first row, but only
/// if it reaches `options.min_score`.
pub fn resolve<'a, C>(
    scorer: &Scorer<'_>,
    variations: &[String],
    candidates: &'a [C],
    options: &ResolveOptions,
) -> ResolutionOutcome<'a, C>
where
    C: Candidate + Sync,
{
    let mut results = score_all(scorer, variations, candidates, options);

    // Stable: equal scores stay in input order, so the first candidate to
    // reach the maximum ends up first.
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    let best_match = results
        .first()
        .filter(|r| r.score >= options.min_score)
        .cloned();

    debug!(
        candidates = candidates.len(),
        variations = variations.len(),
        best_score = ?results.first().map(|r| r.score),
        matched = best_match.is_some(),
        min_score = options.min_score,
        "resolution finished"
    );

    ResolutionOutcome {
        best_match,
        all_results: results,
        min_score: options.min_score,
    }
}

fn result_for<'a, C: Candidate>(
    scorer: &Scorer<'_>,
    variations: &[String],
    index: usize,
    candidate: &'a C,
) -> MatchResult<'a, C> {
    let (score, variation) = best_for_candidate(scorer, variations, candidate.display_name());
    trace!(
        index,
        candidate = candidate.display_name(),
        score = score.score,
        match_type = %score.match_type,
        "candidate scored"
    );
    MatchResult {
        index,
        candidate,
        score: score.score,
        match_type: score.match_type,
        variation: variation.map(|i| variations[i].clone()),
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all<'a, C: Candidate + Sync>(
    scorer: &Scorer<'_>,
    variations: &[String],
    candidates: &'a [C],
    _options: &ResolveOptions,
) -> Vec<MatchResult<'a, C>> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| result_for(scorer, variations, i, c))
        .collect()
}

#[cfg(feature = "parallel")]
fn score_all<'a, C: Candidate + Sync>(
    scorer: &Scorer<'_>,
    variations: &[String],
    candidates: &'a [C],
    options: &ResolveOptions,
) -> Vec<MatchResult<'a, C>> {
    use rayon::prelude::*;

    if candidates.len() < options.parallel_threshold {
        return candidates
            .iter()
            .enumerate()
            .map(|(i, c)| result_for(scorer, variations, i, c))
            .collect();
    }
    // Indexed collect keeps input order regardless of completion order.
    candidates
        .par_iter()
        .enumerate()
        .map(|(i, c)| result_for(scorer, variations, i, c))
        .collect()
}
