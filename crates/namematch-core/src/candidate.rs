// Candidate records supplied by the acquisition layer

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Anything that exposes a display name can be resolved against a query.
///
/// The engine only ever reads the display name; everything else about the
/// candidate is opaque and handed back untouched in the outcome.
pub trait Candidate {
    fn display_name(&self) -> &str;
}

impl Candidate for str {
    fn display_name(&self) -> &str {
        self
    }
}

impl Candidate for &str {
    fn display_name(&self) -> &str {
        self
    }
}

impl Candidate for String {
    fn display_name(&self) -> &str {
        self.as_str()
    }
}

/// A candidate scraped from an external directory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    /// Opaque handle chosen by the caller (listing URL, registry number, ...).
    #[serde(default)]
    pub id: String,

    /// The name as rendered by the source.
    #[serde(alias = "display_name", alias = "name")]
    pub display_name: String,

    /// Arbitrary source metadata, passed through unchanged.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl CandidateRecord {
    /// Create a record with no metadata.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach one metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

impl Candidate for CandidateRecord {
    fn display_name(&self) -> &str {
        &self.display_name
    }
}
