//! Shared types for business name resolution.
//!
//! This crate holds the vocabulary-independent pieces used by the engine,
//! the CLI and the WASM binding: character classification, match
//! classification labels, candidate records and resolution outcomes.

pub mod candidate;
pub mod character;
pub mod enums;
pub mod outcome;

pub use candidate::{Candidate, CandidateRecord};
pub use enums::MatchType;
pub use outcome::{MatchResult, MatchScore, ResolutionOutcome};
