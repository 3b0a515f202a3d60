// WASM bindings for business name resolution.
//
// Provides a `WasmNameMatcher` class exported via wasm-bindgen that wraps
// the `NameMatcher` from namematch-engine. Structured results are
// serialized to plain JavaScript objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const matcher = new WasmNameMatcher();            // or (configJson, vocabularyJson)
//   matcher.resolve("Acme Roofing", [{ id: "1", displayName: "Acme Roofing, LLC" }]);
//     // => { bestMatch: { index: 0, score: 1, matchType: "exact", ... },
//     //      allResults: [...], minScore: 0.65 }
//   matcher.resolve("Acme", ["Acme Co", "Apex"], 0.9);  // bare strings work too
//   matcher.score("Acme", "Acme Roofing LLC");
//     // => { score: 0.877, matchType: "search_in_result" }
//   matcher.variations("St. Mary's Construction");   // => ["St. Mary's Construction", ...]
//   matcher.normalize("Acme-Roofing, LLC");           // => "acme roofing llc"
//   matcher.coreName("The Acme Company");             // => "acme"

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use namematch_core::CandidateRecord;
use namematch_engine::NameMatcher;

// ============================================================================
// Serde DTO types for JS interop
// ============================================================================

/// A candidate as accepted from JavaScript: either a bare display name or
/// a `{ id, displayName, metadata }` object.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsCandidate {
    Name(String),
    Record(CandidateRecord),
}

/// Turn JS candidates into records. Bare names get their array position as
/// the id.
fn into_records(inputs: Vec<JsCandidate>) -> Vec<CandidateRecord> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(i, c)| match c {
            JsCandidate::Name(name) => CandidateRecord::new(i.to_string(), name),
            JsCandidate::Record(record) => record,
        })
        .collect()
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    // Plain objects rather than JS `Map`s for candidate metadata.
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn error_to_js(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmNameMatcher
// ============================================================================

/// Business name resolution engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmNameMatcher {
    matcher: NameMatcher,
}

#[wasm_bindgen]
impl WasmNameMatcher {
    /// Create a matcher from optional JSON documents.
    ///
    /// - `config_json`: engine config (`minScore`, `strategy`, `maxVariations`)
    /// - `vocabulary_json`: vocabulary tables replacing or extending the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: Option<String>,
        vocabulary_json: Option<String>,
    ) -> Result<WasmNameMatcher, JsError> {
        let matcher = NameMatcher::from_json(config_json.as_deref(), vocabulary_json.as_deref())
            .map_err(error_to_js)?;
        Ok(WasmNameMatcher { matcher })
    }

    /// Resolve `query` against an array of candidates.
    ///
    /// Returns `{ bestMatch, allResults, minScore }`; each result carries
    /// `index`, `score`, `matchType`, `variation` and `candidate`.
    /// `min_score` overrides the configured threshold for this call.
    pub fn resolve(
        &self,
        query: &str,
        candidates: JsValue,
        min_score: Option<f64>,
    ) -> Result<JsValue, JsError> {
        let inputs: Vec<JsCandidate> = serde_wasm_bindgen::from_value(candidates)
            .map_err(|e| JsError::new(&format!("invalid candidates: {e}")))?;
        let records = into_records(inputs);
        let min_score = min_score.unwrap_or(self.matcher.config().min_score);
        let outcome = self
            .matcher
            .resolve_with_min_score(query, &records, min_score)
            .map_err(error_to_js)?;
        to_js(&outcome)
    }

    /// Score query-side name `a` against candidate-side name `b`.
    ///
    /// Returns `{ score, matchType }`.
    pub fn score(&self, a: &str, b: &str) -> Result<JsValue, JsError> {
        to_js(&self.matcher.score(a, b))
    }

    /// Score with every rule's verdict, for debugging a surprising result.
    pub fn explain(&self, a: &str, b: &str) -> Result<JsValue, JsError> {
        to_js(&self.matcher.explain(a, b))
    }

    /// The variation set a query name expands to.
    pub fn variations(&self, name: &str) -> Vec<String> {
        self.matcher.variations(name)
    }

    /// Lowercase, separators collapsed to single spaces, trimmed.
    pub fn normalize(&self, text: &str) -> String {
        self.matcher.normalize(text)
    }

    /// The normalized name with legal suffixes and filler words removed.
    #[wasm_bindgen(js_name = "coreName")]
    pub fn core_name(&self, text: &str) -> String {
        self.matcher.core_name(text)
    }

    /// The effective minimum score.
    #[wasm_bindgen(getter, js_name = "minScore")]
    pub fn min_score(&self) -> f64 {
        self.matcher.config().min_score
    }
}
