//! The batch pipeline, executed strictly in sequence: load the three
//! provider exports, run the join, score every result row, write the
//! delimited export and its gzip artifact.

use std::path::Path;
use std::time::Instant;

use poimatch_io::{compress_file, write_scored, Dialect};
use poimatch_score::{score, MatchCandidate, ScoredMatch};
use poimatch_store::{TableStore, Value};

use crate::CliError;

// Input/output locations and table names are fixed for the run,
// relative to the working directory.
pub const OSM_POI_FILE: &str = "osm_poi.csv.gz";
pub const GOOGLE_POI_FILE: &str = "google_poi.csv.gz";
pub const MATCHING_FILE: &str = "google_osm_poi_matching.csv.gz";

pub const OSM_POI_TABLE: &str = "osm_poi";
pub const GOOGLE_POI_TABLE: &str = "google_poi";
pub const MATCHING_TABLE: &str = "google_osm_poi";

pub const OUT_CSV: &str = "out.csv";
pub const OUT_CSV_GZ: &str = "out.csv.gz";

/// Name of the appended score column.
pub const CONFIDENCE_COLUMN: &str = "confidence_score";

/// Every match row against its OSM and Google counterparts. Implicit
/// inner join: match rows lacking either counterpart drop out, and
/// non-unique keys multiply rows (cross-product semantics).
/// No ORDER BY — row order is the engine's deterministic plan order
/// for identical inputs.
const JOIN_SQL: &str = "\
SELECT m.*, osm.name, goo.name, goo.address
FROM google_osm_poi AS m, osm_poi AS osm, google_poi AS goo
WHERE m.osm_id = osm.osm_id AND m.internal_id = goo.internal_id";

/// What a run produced, for reporting and tests.
#[derive(Debug)]
pub struct RunSummary {
    pub match_rows_loaded: usize,
    pub rows_written: usize,
}

/// Run the whole pipeline against `base_dir`. Fails fast: the first
/// error from any stage aborts the run and propagates to the caller.
pub fn run(base_dir: &Path) -> Result<RunSummary, CliError> {
    let store = TableStore::in_memory().map_err(|e| CliError::load(e.to_string()))?;

    load_table(&store, base_dir, OSM_POI_FILE, OSM_POI_TABLE)?;
    load_table(&store, base_dir, GOOGLE_POI_FILE, GOOGLE_POI_TABLE)?;
    let match_rows_loaded = load_table(&store, base_dir, MATCHING_FILE, MATCHING_TABLE)?;

    // Match-table columns become the output header; the enumeration
    // doubles as a schema diagnostic.
    let match_columns = store
        .describe(MATCHING_TABLE)
        .map_err(|e| CliError::query(e.to_string()))?;
    eprintln!("describe {MATCHING_TABLE}:");
    for (i, name) in match_columns.iter().enumerate() {
        eprintln!("  {i}: {name}");
    }

    let joined = store.query(JOIN_SQL).map_err(|e| {
        CliError::query(e.to_string())
            .with_hint("inputs must provide osm_id, internal_id, name and address columns")
    })?;

    let mut scored: Vec<ScoredMatch> = Vec::with_capacity(joined.len());
    for (i, row) in joined.into_iter().enumerate() {
        let candidate = to_candidate(row);
        scored.push(score(i, candidate).map_err(|e| CliError::score(e.to_string()))?);
    }

    let mut header = match_columns;
    header.push(CONFIDENCE_COLUMN.to_string());

    let out_csv = base_dir.join(OUT_CSV);
    write_scored(&out_csv, &Dialect::default(), &header, &scored).map_err(CliError::write)?;
    compress_file(&out_csv, &base_dir.join(OUT_CSV_GZ)).map_err(CliError::write)?;

    eprintln!("scored {} matches -> {OUT_CSV} (+ {OUT_CSV_GZ})", scored.len());

    Ok(RunSummary { match_rows_loaded, rows_written: scored.len() })
}

fn load_table(
    store: &TableStore,
    base_dir: &Path,
    file: &str,
    table: &str,
) -> Result<usize, CliError> {
    let start = Instant::now();
    let rows = store
        .load_csv(&base_dir.join(file), table)
        .map_err(|e| CliError::load(e.to_string()))?;
    eprintln!(
        "loaded {rows} rows into '{table}' ({}ms)",
        start.elapsed().as_millis()
    );
    Ok(rows)
}

/// Split one join result row into the untouched match columns and the
/// three trailing scoring fields (OSM name, Google name, address).
fn to_candidate(mut row: Vec<Value>) -> MatchCandidate {
    let google_address = take_text(&mut row);
    let google_name = take_text(&mut row);
    let osm_name = take_text(&mut row);
    MatchCandidate {
        match_fields: row.iter().map(Value::to_string).collect(),
        osm_name,
        google_name,
        google_address,
    }
}

fn take_text(row: &mut Vec<Value>) -> Option<String> {
    match row.pop() {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.to_string()),
    }
}
