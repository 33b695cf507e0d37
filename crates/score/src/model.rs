// ---------------------------------------------------------------------------
// Pipeline stage records
// ---------------------------------------------------------------------------

/// Index of the stored search query within the match-table columns.
pub const QUERY_FIELD: usize = 3;

/// One row out of the three-table join, before scoring.
///
/// `match_fields` are the match-table columns carried through
/// untouched (rendered to text); the three optional fields are the
/// join's trailing projection: OSM name, Google name, Google address.
/// SQL NULL arrives as `None`.
#[derive(Debug, Clone)]
pub struct MatchCandidate {
    pub match_fields: Vec<String>,
    pub osm_name: Option<String>,
    pub google_name: Option<String>,
    pub google_address: Option<String>,
}

/// Final output row: the untouched match columns plus the confidence
/// score in [0, 1]. The three name/address fields are consumed by
/// scoring and dropped.
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    pub match_fields: Vec<String>,
    pub confidence: f64,
}
