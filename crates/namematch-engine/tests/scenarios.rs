//! End-to-end resolution scenarios, plus a fixture-driven table in
//! `tests/fixtures/resolutions.json`.

use std::path::PathBuf;

use namematch_engine::{
    CandidateRecord, EngineConfig, MatchType, NameMatcher, Vocabulary, resolve, score,
};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Named scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_a_comma_suffix() {
    let candidates = vec![CandidateRecord::new("a", "Acme Roofing, LLC")];
    let outcome = NameMatcher::default().resolve("Acme Roofing", &candidates);
    let best = outcome.best_match.expect("match");
    assert!(matches!(best.match_type, MatchType::Exact | MatchType::CoreExact));
    assert!(best.score >= 0.95);
}

#[test]
fn scenario_b_saint_abbreviation() {
    let candidates = vec![CandidateRecord::new("b", "Saint Marys Construction Inc")];
    let outcome = NameMatcher::default().resolve("St. Mary's Construction", &candidates);
    let best = outcome.best_match.expect("match");
    assert!(best.score >= 0.85, "{best:?}");
    assert_eq!(best.variation.as_deref(), Some("saint mary s construction"));
}

#[test]
fn scenario_c_no_match() {
    let candidates = vec![
        CandidateRecord::new("1", "Unrelated Co"),
        CandidateRecord::new("2", "Another Biz"),
    ];
    let outcome = NameMatcher::default().resolve("XYZ", &candidates);
    assert!(outcome.best_match.is_none());
    assert_eq!(outcome.all_results.len(), 2);
    assert!(outcome.all_results.iter().all(|r| r.score < 0.65));
}

#[test]
fn scenario_d_empty_candidates() {
    let candidates: Vec<CandidateRecord> = Vec::new();
    let outcome = NameMatcher::default().resolve("Acme", &candidates);
    assert!(outcome.all_results.is_empty());
    assert!(outcome.best_match.is_none());
}

#[test]
fn inverted_article_resolves_as_same_core() {
    let candidates = ["Acme Roofing", "Acme Company, The"];
    let outcome = resolve("Acme", &candidates, 0.65);
    let best = outcome.best_match.expect("match");
    assert_eq!(best.index, 1);
    assert_eq!(best.match_type, MatchType::CoreExact);
}

#[test]
fn containment_asymmetry() {
    let forward = score("acme", "acme roofing llc");
    let backward = score("acme roofing llc", "acme");
    assert_ne!(forward.score, backward.score);
    assert!(forward.score > 0.85 && backward.score > 0.85);
}

#[test]
fn threshold_gating_keeps_results_table() {
    let candidates = ["Acme Roofing Siding Gutters", "Zenith Dental"];
    let outcome = resolve("Acme", &candidates, 0.9);
    assert!(outcome.best_match.is_none());
    assert_eq!(outcome.all_results.len(), 2);
    assert_eq!(outcome.closest(1)[0].index, 0);
}

#[test]
fn metadata_passes_through() {
    let candidates = vec![
        CandidateRecord::new("yelp:123", "Acme Roofing")
            .with_metadata("rating", serde_json::json!(4.5)),
    ];
    let outcome = NameMatcher::default().resolve("Acme Roofing LLC", &candidates);
    let best = outcome.best_match.expect("match");
    assert_eq!(best.candidate.id, "yelp:123");
    assert_eq!(best.candidate.metadata["rating"], serde_json::json!(4.5));
}

#[test]
fn outcome_serializes_for_callers() {
    let candidates = vec![CandidateRecord::new("a", "Acme Roofing, LLC")];
    let outcome = NameMatcher::default().resolve("Acme Roofing", &candidates);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["bestMatch"]["candidate"]["id"], "a");
    assert_eq!(json["allResults"][0]["matchType"], "exact");
    assert_eq!(json["minScore"], 0.65);
}

#[test]
fn independent_vocabularies() {
    let german = Vocabulary::from_json(r#"{"legalSuffixes": ["gmbh", "ag"]}"#).unwrap();
    let de = NameMatcher::new(EngineConfig::default(), german).unwrap();
    let us = NameMatcher::default();

    assert_eq!(de.core_name("Baum GmbH"), "baum");
    assert_eq!(us.core_name("Baum GmbH"), "baum gmbh");
    assert_eq!(de.core_name("Baum LLC"), "baum llc");
}

#[test]
fn deterministic_across_calls() {
    let matcher = NameMatcher::default();
    let candidates = ["Acme Roofing", "ACME Roofing Co", "Acme Roofers", "Roofing by Acme"];
    let first = serde_json::to_string(&matcher.resolve("Acme Roofing LLC", &candidates)).unwrap();
    for _ in 0..5 {
        let again =
            serde_json::to_string(&matcher.resolve("Acme Roofing LLC", &candidates)).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn large_candidate_lists_keep_input_order_on_ties() {
    // enough candidates to cross the parallel threshold when that feature is on
    let mut candidates: Vec<String> = (0..600).map(|i| format!("Unrelated Business {i}")).collect();
    candidates[123] = "Acme Roofing".to_string();
    candidates[456] = "ACME ROOFING".to_string();
    let outcome = NameMatcher::default().resolve("Acme Roofing", &candidates);
    let best = outcome.best_match.expect("match");
    assert_eq!(best.index, 123);
    assert_eq!(outcome.all_results[1].index, 456);
    assert_eq!(outcome.all_results.len(), 600);
}

// ---------------------------------------------------------------------------
// Fixture table
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Case {
    name: String,
    query: String,
    candidates: Vec<String>,
    min_score: Option<f64>,
    expected_index: Option<usize>,
    expected_match_type: Option<MatchType>,
}

fn load_cases() -> Vec<Case> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/resolutions.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {}", path.display(), e))
}

#[test]
fn fixture_resolutions() {
    let matcher = NameMatcher::default();
    let cases = load_cases();
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let min_score = case.min_score.unwrap_or(0.65);
        let outcome = matcher
            .resolve_with_min_score(&case.query, &case.candidates, min_score)
            .unwrap();
        let got_index = outcome.best_match.as_ref().map(|m| m.index);
        if got_index != case.expected_index {
            failures.push(format!(
                "{}: expected index {:?}, got {:?} (table: {:?})",
                case.name,
                case.expected_index,
                got_index,
                outcome
                    .all_results
                    .iter()
                    .map(|r| (r.index, r.score, r.match_type))
                    .collect::<Vec<_>>()
            ));
            continue;
        }
        if let (Some(expected), Some(best)) = (case.expected_match_type, &outcome.best_match) {
            if best.match_type != expected {
                failures.push(format!(
                    "{}: expected {expected}, got {} ({})",
                    case.name, best.match_type, best.score
                ));
            }
        }
    }
    assert!(failures.is_empty(), "fixture failures:\n{}", failures.join("\n"));
}
