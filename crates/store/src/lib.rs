//! `poimatch-store` — in-memory analytical table store.
//!
//! Loads delimited provider exports (gzip or plain) into named SQLite
//! tables with inferred column types, and materializes query results
//! for the pipeline. One store instance is scoped to a run; there is
//! no global connection state.

pub mod error;
pub mod infer;
pub mod store;
pub mod value;

pub use error::StoreError;
pub use infer::ColumnType;
pub use store::TableStore;
pub use value::Value;
