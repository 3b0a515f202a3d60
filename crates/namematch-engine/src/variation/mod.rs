// Query name variations
//
// Expands one query name into a bounded set of alternate spellings so that
// the scorer can meet directory listings halfway.
//
// Architecture:
//   - `generators`: one rule per type (VariationGenerator trait)
//   - `set`: insertion-ordered, deduplicating, capped set builder
//   - `strategy`: composes generators into the broad and strict pipelines

pub mod generators;
pub mod set;
pub mod strategy;

pub use generators::{VariationGenerator, VariationInput};
pub use set::{DEFAULT_MAX_VARIATIONS, VariationSet};
pub use strategy::{StrategyKind, VariationStrategy, broad_strategy, strict_suffix_strategy};

use crate::vocabulary::Vocabulary;

/// Generate the variations of `name` with the broad strategy and the
/// default cap.
pub fn generate_variations(name: &str, vocabulary: &Vocabulary) -> Vec<String> {
    broad_strategy(DEFAULT_MAX_VARIATIONS)
        .generate(name, vocabulary)
        .into_vec()
}
