// Confidence scoring for joined POI match rows

use strsim::normalized_levenshtein;

use crate::error::ScoreError;
use crate::model::{MatchCandidate, ScoredMatch, QUERY_FIELD};

/// Case-insensitive normalized edit-distance similarity in [0, 1].
pub fn fuzz_ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Score one joined row. `row` is the 0-based result-row index, used
/// for error reporting only.
///
/// When the OSM name is present and non-empty it is compared against
/// the Google name. Otherwise the stored search query is compared
/// against "google_name, google_address", with every leading `{` and
/// trailing `}` stripped off the address. Either branch fails fast on
/// an absent required field; there is no per-row recovery.
pub fn score(row: usize, candidate: MatchCandidate) -> Result<ScoredMatch, ScoreError> {
    let google_name = required(&candidate.google_name, row, "google name")?;

    let confidence = match candidate.osm_name.as_deref() {
        Some(osm_name) if !osm_name.is_empty() => fuzz_ratio(osm_name, google_name),
        _ => {
            let address = required(&candidate.google_address, row, "google address")?;
            let query = candidate
                .match_fields
                .get(QUERY_FIELD)
                .ok_or(ScoreError::MissingField { row, field: "search query" })?;
            let synthetic = format!(
                "{}, {}",
                google_name,
                address.trim_start_matches('{').trim_end_matches('}')
            );
            fuzz_ratio(query, &synthetic)
        }
    };

    Ok(ScoredMatch { match_fields: candidate.match_fields, confidence })
}

fn required<'a>(
    value: &'a Option<String>,
    row: usize,
    field: &'static str,
) -> Result<&'a str, ScoreError> {
    value
        .as_deref()
        .ok_or(ScoreError::MissingField { row, field })
}
