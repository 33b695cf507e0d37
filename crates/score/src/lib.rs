//! `poimatch-score` — POI match confidence scoring engine.
//!
//! Pure engine crate: receives joined rows, returns scored rows.
//! No CLI or IO dependencies.

pub mod confidence;
pub mod error;
pub mod model;

pub use confidence::{fuzz_ratio, score};
pub use error::ScoreError;
pub use model::{MatchCandidate, ScoredMatch, QUERY_FIELD};
