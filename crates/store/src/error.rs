use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    /// File open/read error (missing file, permissions, bad gzip).
    Io { path: String, msg: String },
    /// Malformed delimited content (bad quoting, inconsistent column
    /// counts across rows).
    Csv { path: String, msg: String },
    /// The file has no header row to name columns from.
    EmptyHeader { path: String },
    /// SQLite error (DDL, insert, query).
    Sql(String),
    /// `describe` target does not exist.
    UnknownTable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, msg } => write!(f, "cannot read {path}: {msg}"),
            Self::Csv { path, msg } => write!(f, "malformed CSV in {path}: {msg}"),
            Self::EmptyHeader { path } => write!(f, "{path}: no header row"),
            Self::Sql(msg) => write!(f, "SQL error: {msg}"),
            Self::UnknownTable(table) => write!(f, "unknown table: {table}"),
        }
    }
}

impl std::error::Error for StoreError {}
