// Variation strategies: which generators run, in which order

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::vocabulary::Vocabulary;

use super::generators::*;
use super::set::VariationSet;

/// Selects one of the built-in strategies by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Every rule: suffix combinations, `and`/`&` swaps, abbreviations and
    /// truncated prefixes.
    #[default]
    Broad,
    /// Only the original, normalized and core forms plus core/suffix
    /// combinations.
    #[serde(alias = "strict")]
    StrictSuffix,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Broad => "broad",
            StrategyKind::StrictSuffix => "strict_suffix",
        }
    }

    /// Parse a strategy name as accepted on the command line.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "broad" => Some(StrategyKind::Broad),
            "strict" | "strict_suffix" | "strict-suffix" => Some(StrategyKind::StrictSuffix),
            _ => None,
        }
    }
}

/// An ordered list of generators with a cap on the number of variations.
///
/// Generators run in order until the set is full. Order matters twice:
/// it decides which variations survive the cap, and the selector breaks
/// score ties in favour of the earlier variation.
pub struct VariationStrategy {
    kind: StrategyKind,
    max_variations: usize,
    generators: Vec<Box<dyn VariationGenerator>>,
}

impl VariationStrategy {
    /// Build the named built-in strategy.
    pub fn for_kind(kind: StrategyKind, max_variations: usize) -> Self {
        match kind {
            StrategyKind::Broad => broad_strategy(max_variations),
            StrategyKind::StrictSuffix => strict_suffix_strategy(max_variations),
        }
    }

    /// Run every generator over `name`.
    pub fn generate(&self, name: &str, vocabulary: &Vocabulary) -> VariationSet {
        let input = VariationInput::new(name, vocabulary);
        let mut set = VariationSet::new(self.max_variations);

        for generator in &self.generators {
            if set.is_full() {
                trace!(generator = generator.name(), "variation cap reached");
                break;
            }
            generator.generate(&input, &mut set);
        }
        set
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    pub fn max_variations(&self) -> usize {
        self.max_variations
    }

    /// Names of the generators in run order.
    pub fn generator_names(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.name()).collect()
    }
}

// =========================================================================
// Factory functions
// =========================================================================

/// All rules.
///
/// The cheap, high-value rewrites run before the suffix combinations so
/// that a tight cap drops the combinations first; they only ever help
/// the exact-match rule since the scorer strips suffixes itself.
pub fn broad_strategy(max_variations: usize) -> VariationStrategy {
    let generators: Vec<Box<dyn VariationGenerator>> = vec![
        Box::new(Original),
        Box::new(Normalized),
        Box::new(Core),
        Box::new(AmpersandSwap),
        Box::new(Abbreviations),
        Box::new(TruncatedPrefixes),
        Box::new(CoreWithSuffixes),
    ];

    VariationStrategy {
        kind: StrategyKind::Broad,
        max_variations,
        generators,
    }
}

/// Suffix-only rules, for call sites that must not match on partial or
/// rewritten names.
pub fn strict_suffix_strategy(max_variations: usize) -> VariationStrategy {
    let generators: Vec<Box<dyn VariationGenerator>> = vec![
        Box::new(Original),
        Box::new(Normalized),
        Box::new(Core),
        Box::new(CoreWithSuffixes),
    ];

    VariationStrategy {
        kind: StrategyKind::StrictSuffix,
        max_variations,
        generators,
    }
}
