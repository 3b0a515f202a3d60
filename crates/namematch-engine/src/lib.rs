//! Business name resolution engine.
//!
//! Decides which of a set of scraped directory listings, if any, is the
//! same business as a query name, using string similarity alone.
//!
//! The pipeline, leaves first:
//!
//! - [`normalizer`]: lowercase, separators to single spaces, trimmed
//! - [`suffix`]: strip trailing legal suffixes and filler words
//! - [`variation`]: expand a query into a bounded set of alternate spellings
//! - [`scorer`]: classify a pair of names through an ordered rule table
//! - [`selector`]: pick the best candidate across all variations
//!
//! [`NameMatcher`] ties the stages together behind one handle:
//!
//! ```
//! use namematch_engine::NameMatcher;
//!
//! let matcher = NameMatcher::default();
//! let candidates = ["Apex Plumbing", "Acme Roofing, LLC"];
//! let outcome = matcher.resolve("Acme Roofing", &candidates);
//! assert_eq!(outcome.best_match.map(|m| m.index), Some(1));
//! ```
//!
//! Every operation is pure: no I/O, no global state, same inputs give the
//! same outputs.

pub mod config;
pub mod handle;
pub mod normalizer;
pub mod scorer;
pub mod selector;
pub mod suffix;
pub mod variation;
pub mod vocabulary;

pub use config::{ConfigError, EngineConfig};
pub use handle::{MatcherError, NameMatcher};
pub use normalizer::normalize;
pub use scorer::{ScoreTrace, Scorer};
pub use selector::{DEFAULT_MIN_SCORE, ResolveOptions};
pub use suffix::{core_name, strip_suffixes};
pub use variation::{StrategyKind, VariationStrategy, generate_variations};
pub use vocabulary::{Vocabulary, VocabularyError};

pub use namematch_core::{
    Candidate, CandidateRecord, MatchResult, MatchScore, MatchType, ResolutionOutcome,
};

/// Resolve `query` against `candidates` with the default vocabulary and the
/// broad variation strategy.
pub fn resolve<'a, C>(query: &str, candidates: &'a [C], min_score: f64) -> ResolutionOutcome<'a, C>
where
    C: Candidate + Sync,
{
    let vocabulary = Vocabulary::default();
    let scorer = Scorer::new(&vocabulary);
    let variations = generate_variations(query, &vocabulary);
    let options = ResolveOptions {
        min_score,
        ..ResolveOptions::default()
    };
    selector::resolve(&scorer, &variations, candidates, &options)
}

/// Score query-side name `a` against candidate-side name `b` with the
/// default vocabulary.
pub fn score(a: &str, b: &str) -> MatchScore {
    Scorer::new(&Vocabulary::default()).score(a, b)
}
