// Variation set builder: trimming, deduplication, size cap

use hashbrown::HashSet;

/// Upper bound on variations per query unless configured otherwise.
pub const DEFAULT_MAX_VARIATIONS: usize = 24;

/// An insertion-ordered set of variation strings.
///
/// Entries are trimmed on the way in; empty strings and duplicates are
/// ignored. Once `max_variations` entries are held, further additions are
/// dropped, which keeps the scoring cost of a query bounded. Insertion
/// order is deterministic, so the same query always yields the same list.
#[derive(Debug, Clone)]
pub struct VariationSet {
    max_variations: usize,
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl VariationSet {
    pub fn new(max_variations: usize) -> Self {
        Self {
            max_variations,
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Add a variation. Returns `true` if it was accepted.
    pub fn add(&mut self, variation: &str) -> bool {
        if self.is_full() {
            return false;
        }
        let variation = variation.trim();
        if variation.is_empty() || self.seen.contains(variation) {
            return false;
        }
        self.seen.insert(variation.to_string());
        self.entries.push(variation.to_string());
        true
    }

    /// Returns `true` if no more variations will be accepted.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_variations
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, variation: &str) -> bool {
        self.seen.contains(variation)
    }

    pub fn max_variations(&self) -> usize {
        self.max_variations
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Consume the set and return the variations in insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a VariationSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
