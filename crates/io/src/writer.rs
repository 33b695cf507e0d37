// Enriched match export

use std::path::Path;

use poimatch_score::ScoredMatch;

use crate::dialect::Dialect;

/// Write the header then one record per scored match, UTF-8 with no
/// byte-order mark. The writer is flushed before returning and
/// dropped (closing the file) on every exit path.
pub fn write_scored(
    path: &Path,
    dialect: &Dialect,
    header: &[String],
    rows: &[ScoredMatch],
) -> Result<(), String> {
    let mut writer = dialect
        .writer_builder()
        .from_path(path)
        .map_err(|e| format!("cannot create {}: {e}", path.display()))?;

    writer.write_record(header).map_err(|e| e.to_string())?;

    for row in rows {
        let confidence = format_confidence(row.confidence);
        let mut record: Vec<&str> = row.match_fields.iter().map(String::as_str).collect();
        record.push(confidence.as_str());
        writer.write_record(&record).map_err(|e| e.to_string())?;
    }

    writer.flush().map_err(|e| e.to_string())?;
    Ok(())
}

/// Render a confidence score, keeping the trailing `.0` on integral
/// values ("1.0", not "1").
pub fn format_confidence(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        score.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::tempdir;

    fn scored(fields: &[&str], confidence: f64) -> ScoredMatch {
        ScoredMatch {
            match_fields: fields.iter().map(|s| s.to_string()).collect(),
            confidence,
        }
    }

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_then_rows_with_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_scored(
            &path,
            &Dialect::default(),
            &header(&["osm_id", "internal_id", "match_type", "query", "confidence_score"]),
            &[scored(&["101", "g1", "auto", "luna"], 1.0)],
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "osm_id;internal_id;match_type;query;confidence_score\r\n101;g1;auto;luna;1.0\r\n"
        );
    }

    #[test]
    fn test_delimiter_and_quote_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let dialect = Dialect::default();

        // Fields containing the delimiter, the quote char and a CRLF
        let tricky = ["a;b", "say \"hi\"", "line\r\nbreak", "plain"];
        write_scored(
            &path,
            &dialect,
            &header(&["c1", "c2", "c3", "c4", "confidence_score"]),
            &[scored(&tricky, 0.5)],
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut reader = dialect.reader_builder().from_reader(content.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        for (i, field) in tricky.iter().enumerate() {
            assert_eq!(record.get(i), Some(*field));
        }
        assert_eq!(record.get(4), Some("0.5"));
    }

    #[test]
    fn test_minimal_quoting_leaves_plain_fields_bare() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_scored(
            &path,
            &Dialect::default(),
            &header(&["a", "confidence_score"]),
            &[scored(&["plain"], 0.25)],
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains('"'), "plain fields must not be quoted: {content}");
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(1.0), "1.0");
        assert_eq!(format_confidence(0.0), "0.0");
        assert_eq!(format_confidence(0.85), "0.85");
    }

    #[test]
    fn test_no_byte_order_mark() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_scored(&path, &Dialect::default(), &header(&["a"]), &[]).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(!bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
        assert!(bytes.starts_with(b"a\r\n"));
    }
}
