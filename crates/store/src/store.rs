// In-memory table store over SQLite

use std::io::Read;
use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::error::StoreError;
use crate::infer::{bind_value, infer_column_types};
use crate::value::Value;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// An in-memory analytical store for one batch run.
///
/// Tables are created by loading delimited files; the store is
/// dropped (and the connection released) when the run ends, on every
/// exit path.
pub struct TableStore {
    conn: Connection,
}

impl TableStore {
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Sql(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Load a comma-delimited file (gzip or plain) into `table`.
    ///
    /// The header row names the columns; types are inferred from the
    /// full file content. Rows with inconsistent field counts abort
    /// the load. Returns the number of rows loaded.
    pub fn load_csv(&self, path: &Path, table: &str) -> Result<usize, StoreError> {
        let shown = path.display().to_string();
        let bytes = read_maybe_gzip(path)?;

        let mut reader = csv::ReaderBuilder::new().from_reader(bytes.as_slice());
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| StoreError::Csv { path: shown.clone(), msg: e.to_string() })?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() {
            return Err(StoreError::EmptyHeader { path: shown });
        }

        let mut records = Vec::new();
        for record in reader.records() {
            records.push(record.map_err(|e| StoreError::Csv { path: shown.clone(), msg: e.to_string() })?);
        }

        let types = infer_column_types(&records, headers.len());

        let columns: Vec<String> = headers
            .iter()
            .zip(&types)
            .map(|(name, ty)| format!("{} {}", quote_ident(name), ty.sql_name()))
            .collect();
        self.conn
            .execute(
                &format!("CREATE TABLE {} ({})", quote_ident(table), columns.join(", ")),
                [],
            )
            .map_err(|e| StoreError::Sql(e.to_string()))?;

        // Insert in one transaction for performance
        self.conn
            .execute("BEGIN TRANSACTION", [])
            .map_err(|e| StoreError::Sql(e.to_string()))?;

        {
            let placeholders: Vec<String> =
                (1..=headers.len()).map(|i| format!("?{i}")).collect();
            let mut stmt = self
                .conn
                .prepare(&format!(
                    "INSERT INTO {} VALUES ({})",
                    quote_ident(table),
                    placeholders.join(", ")
                ))
                .map_err(|e| StoreError::Sql(e.to_string()))?;

            for record in &records {
                let bound = record
                    .iter()
                    .zip(&types)
                    .map(|(field, ty)| bind_value(field, *ty));
                stmt.execute(rusqlite::params_from_iter(bound))
                    .map_err(|e| StoreError::Sql(e.to_string()))?;
            }
        }

        self.conn
            .execute("COMMIT", [])
            .map_err(|e| StoreError::Sql(e.to_string()))?;

        Ok(records.len())
    }

    /// Execute `sql` and materialize the full result set.
    pub fn query(&self, sql: &str) -> Result<Vec<Vec<Value>>, StoreError> {
        let mut stmt = self.conn.prepare(sql).map_err(|e| StoreError::Sql(e.to_string()))?;
        let cols = stmt.column_count();

        let mut rows = stmt.query([]).map_err(|e| StoreError::Sql(e.to_string()))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(|e| StoreError::Sql(e.to_string()))? {
            let mut fields = Vec::with_capacity(cols);
            for i in 0..cols {
                let value = match row.get_ref(i).map_err(|e| StoreError::Sql(e.to_string()))? {
                    ValueRef::Null => Value::Null,
                    ValueRef::Integer(n) => Value::Integer(n),
                    ValueRef::Real(r) => Value::Real(r),
                    ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
                    ValueRef::Blob(b) => Value::Text(String::from_utf8_lossy(b).into_owned()),
                };
                fields.push(value);
            }
            out.push(fields);
        }
        Ok(out)
    }

    /// Ordered column names of `table`. Doubles as a debugging aid and
    /// enumerates output headers for carried-through tables.
    pub fn describe(&self, table: &str) -> Result<Vec<String>, StoreError> {
        let stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {} LIMIT 0", quote_ident(table)))
            .map_err(|_| StoreError::UnknownTable(table.to_string()))?;
        Ok(stmt.column_names().into_iter().map(str::to_string).collect())
    }
}

/// Read the whole file, transparently decompressing gzip content.
/// Detection is by magic bytes, not extension, so a plain file with a
/// `.gz` name still loads.
fn read_maybe_gzip(path: &Path) -> Result<Vec<u8>, StoreError> {
    let shown = path.display().to_string();
    let raw = std::fs::read(path).map_err(|e| StoreError::Io { path: shown.clone(), msg: e.to_string() })?;

    if raw.len() >= 2 && raw[..2] == GZIP_MAGIC {
        let mut decoder = flate2::read::GzDecoder::new(raw.as_slice());
        let mut decoded = Vec::new();
        decoder
            .read_to_end(&mut decoded)
            .map_err(|e| StoreError::Io { path: shown, msg: e.to_string() })?;
        Ok(decoded)
    } else {
        Ok(raw)
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
