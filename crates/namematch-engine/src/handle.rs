// NameMatcher: top-level integration point for name resolution.
//
// Owns the vocabulary, the configuration and the variation strategy, and
// exposes the whole pipeline (normalize, strip, vary, score, select)
// through one handle. Everything is built at construction time and only
// read afterwards, so a `NameMatcher` can be shared across threads and
// several matchers with different vocabularies can run side by side.

use namematch_core::{Candidate, MatchScore, ResolutionOutcome};
use tracing::{debug, instrument};

use crate::config::{ConfigError, EngineConfig, validate_min_score};
use crate::normalizer::normalize;
use crate::scorer::{ScoreTrace, Scorer};
use crate::selector::{self, ResolveOptions};
use crate::suffix::core_name;
use crate::variation::VariationStrategy;
use crate::vocabulary::{Vocabulary, VocabularyError};

/// Error type for NameMatcher construction failures.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

/// Resolves query names against candidate lists.
pub struct NameMatcher {
    config: EngineConfig,
    vocabulary: Vocabulary,
    strategy: VariationStrategy,
}

impl Default for NameMatcher {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            strategy: VariationStrategy::for_kind(config.strategy, config.max_variations),
            config,
            vocabulary: Vocabulary::default(),
        }
    }
}

impl std::fmt::Debug for NameMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameMatcher")
            .field("config", &self.config)
            .field("generators", &self.strategy.generator_names())
            .finish_non_exhaustive()
    }
}

impl NameMatcher {
    /// Create a matcher after validating `config`.
    pub fn new(config: EngineConfig, vocabulary: Vocabulary) -> Result<Self, MatcherError> {
        config.validate()?;
        let strategy = VariationStrategy::for_kind(config.strategy, config.max_variations);
        debug!(
            min_score = config.min_score,
            strategy = config.strategy.as_str(),
            max_variations = config.max_variations,
            "name matcher created"
        );
        Ok(Self {
            config,
            vocabulary,
            strategy,
        })
    }

    /// Create a matcher from JSON configuration and vocabulary documents.
    /// `None` selects the defaults.
    pub fn from_json(
        config_json: Option<&str>,
        vocabulary_json: Option<&str>,
    ) -> Result<Self, MatcherError> {
        let config = match config_json {
            Some(json) => EngineConfig::from_json(json)?,
            None => EngineConfig::default(),
        };
        let vocabulary = match vocabulary_json {
            Some(json) => Vocabulary::from_json(json)?,
            None => Vocabulary::default(),
        };
        Self::new(config, vocabulary)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn scorer(&self) -> Scorer<'_> {
        Scorer::new(&self.vocabulary)
    }

    // =========================================================================
    // Pipeline stages
    // =========================================================================

    /// Normalize raw text.
    pub fn normalize(&self, text: &str) -> String {
        normalize(text)
    }

    /// Normalize raw text and strip legal suffixes and filler words.
    pub fn core_name(&self, text: &str) -> String {
        core_name(text, &self.vocabulary)
    }

    /// The variation set for `name` under the configured strategy.
    pub fn variations(&self, name: &str) -> Vec<String> {
        self.strategy.generate(name, &self.vocabulary).into_vec()
    }

    /// Score query-side name `a` against candidate-side name `b`.
    pub fn score(&self, a: &str, b: &str) -> MatchScore {
        self.scorer().score(a, b)
    }

    /// Score with every rule's verdict, for diagnostics.
    pub fn explain(&self, a: &str, b: &str) -> ScoreTrace {
        self.scorer().score_with_trace(a, b)
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve `query` against `candidates` with the configured threshold.
    pub fn resolve<'a, C>(&self, query: &str, candidates: &'a [C]) -> ResolutionOutcome<'a, C>
    where
        C: Candidate + Sync,
    {
        self.resolve_inner(query, candidates, self.config.min_score)
    }

    /// Resolve with a per-call threshold.
    pub fn resolve_with_min_score<'a, C>(
        &self,
        query: &str,
        candidates: &'a [C],
        min_score: f64,
    ) -> Result<ResolutionOutcome<'a, C>, ConfigError>
    where
        C: Candidate + Sync,
    {
        validate_min_score(min_score)?;
        Ok(self.resolve_inner(query, candidates, min_score))
    }

    #[instrument(level = "debug", skip(self, candidates), fields(candidates = candidates.len()))]
    fn resolve_inner<'a, C>(
        &self,
        query: &str,
        candidates: &'a [C],
        min_score: f64,
    ) -> ResolutionOutcome<'a, C>
    where
        C: Candidate + Sync,
    {
        if candidates.is_empty() {
            return ResolutionOutcome::empty(min_score);
        }
        let variations = self.variations(query);
        let options = ResolveOptions {
            min_score,
            parallel_threshold: self.config.parallel_threshold,
        };
        selector::resolve(&self.scorer(), &variations, candidates, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variation::StrategyKind;
    use namematch_core::{CandidateRecord, MatchType};

    #[test]
    fn default_matcher_resolves() {
        let matcher = NameMatcher::default();
        let candidates = vec![
            CandidateRecord::new("1", "Apex Plumbing"),
            CandidateRecord::new("2", "Acme Roofing, LLC"),
        ];
        let outcome = matcher.resolve("Acme Roofing", &candidates);
        let best = outcome.best_match.unwrap();
        assert_eq!(best.candidate.id, "2");
        assert!(best.score >= 0.95);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = EngineConfig::default().with_min_score(2.0);
        assert!(matches!(
            NameMatcher::new(config, Vocabulary::default()),
            Err(MatcherError::Config(ConfigError::InvalidMinScore(_)))
        ));
    }

    #[test]
    fn from_json_reports_vocabulary_errors() {
        assert!(matches!(
            NameMatcher::from_json(None, Some(r#"{"legalSuffixes": ["--"]}"#)),
            Err(MatcherError::Vocabulary(_))
        ));
        assert!(NameMatcher::from_json(Some(r#"{"minScore": 0.9}"#), None).is_ok());
    }

    #[test]
    fn per_call_threshold() {
        let matcher = NameMatcher::default();
        let candidates = ["Acme Roofing Siding Gutters"];
        let outcome = matcher.resolve_with_min_score("Acme", &candidates, 0.9).unwrap();
        assert!(!outcome.is_match());
        let outcome = matcher.resolve_with_min_score("Acme", &candidates, 0.6).unwrap();
        assert!(outcome.is_match());
        assert!(matcher.resolve_with_min_score("Acme", &candidates, 1.1).is_err());
    }

    #[test]
    fn strict_strategy_changes_variations() {
        let config = EngineConfig::default().with_strategy(StrategyKind::StrictSuffix);
        let matcher = NameMatcher::new(config, Vocabulary::default()).unwrap();
        assert!(!matcher.variations("St. Mary").iter().any(|v| v.contains("saint")));
    }

    #[test]
    fn pipeline_stages() {
        let matcher = NameMatcher::default();
        assert_eq!(matcher.normalize("Acme, LLC"), "acme llc");
        assert_eq!(matcher.core_name("Acme, LLC"), "acme");
        assert_eq!(matcher.score("acme", "ACME").match_type, MatchType::Exact);
        assert_eq!(matcher.explain("acme", "acme inc").result.match_type, MatchType::CoreExact);
    }

    #[test]
    fn empty_candidates_skip_variation_work() {
        let matcher = NameMatcher::default();
        let candidates: Vec<CandidateRecord> = Vec::new();
        let outcome = matcher.resolve("Acme", &candidates);
        assert!(outcome.all_results.is_empty());
        assert!(outcome.best_match.is_none());
        assert_eq!(outcome.min_score, 0.65);
    }
}
