// Column type inference for auto-loaded CSV tables

use rusqlite::types::Value as SqlValue;

/// SQL storage class chosen for a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

impl ColumnType {
    pub fn sql_name(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
        }
    }
}

/// Infer one type per column across every record.
///
/// A column is INTEGER when every non-empty field parses as `i64`,
/// REAL when every non-empty field parses as `f64`, else TEXT. Empty
/// fields load as NULL and do not participate; a column with no
/// non-empty values stays TEXT.
pub fn infer_column_types(records: &[csv::StringRecord], cols: usize) -> Vec<ColumnType> {
    let mut all_int = vec![true; cols];
    let mut all_real = vec![true; cols];
    let mut seen = vec![false; cols];

    for record in records {
        for (i, field) in record.iter().enumerate() {
            if field.is_empty() {
                continue;
            }
            seen[i] = true;
            if all_int[i] && field.parse::<i64>().is_err() {
                all_int[i] = false;
            }
            if all_real[i] && field.parse::<f64>().is_err() {
                all_real[i] = false;
            }
        }
    }

    (0..cols)
        .map(|i| {
            if !seen[i] {
                ColumnType::Text
            } else if all_int[i] {
                ColumnType::Integer
            } else if all_real[i] {
                ColumnType::Real
            } else {
                ColumnType::Text
            }
        })
        .collect()
}

/// Convert one CSV field to its SQLite binding under the inferred
/// column type. Inference scanned every record, so the parses here
/// cannot fail for non-empty fields.
pub(crate) fn bind_value(field: &str, ty: ColumnType) -> SqlValue {
    if field.is_empty() {
        return SqlValue::Null;
    }
    match ty {
        ColumnType::Integer => field
            .parse::<i64>()
            .map(SqlValue::Integer)
            .unwrap_or_else(|_| SqlValue::Text(field.to_string())),
        ColumnType::Real => field
            .parse::<f64>()
            .map(SqlValue::Real)
            .unwrap_or_else(|_| SqlValue::Text(field.to_string())),
        ColumnType::Text => SqlValue::Text(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[&[&str]]) -> Vec<csv::StringRecord> {
        rows.iter().map(|r| csv::StringRecord::from(r.to_vec())).collect()
    }

    #[test]
    fn test_integer_column() {
        let recs = records(&[&["1", "x"], &["42", "y"]]);
        assert_eq!(
            infer_column_types(&recs, 2),
            vec![ColumnType::Integer, ColumnType::Text]
        );
    }

    #[test]
    fn test_mixed_numeric_falls_to_real() {
        let recs = records(&[&["1"], &["2.5"]]);
        assert_eq!(infer_column_types(&recs, 1), vec![ColumnType::Real]);
    }

    #[test]
    fn test_empty_fields_do_not_veto() {
        let recs = records(&[&["", "3"], &["7", ""]]);
        assert_eq!(
            infer_column_types(&recs, 2),
            vec![ColumnType::Integer, ColumnType::Integer]
        );
    }

    #[test]
    fn test_all_empty_column_is_text() {
        let recs = records(&[&[""], &[""]]);
        assert_eq!(infer_column_types(&recs, 1), vec![ColumnType::Text]);
    }
}
