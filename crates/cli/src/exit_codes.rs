//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range | Domain    | Description                              |
//! |-------|-----------|------------------------------------------|
//! | 0     | Universal | Success                                  |
//! | 1     | Universal | General error (unspecified)              |
//! | 2     | Universal | CLI usage error                          |
//! | 3-6   | pipeline  | Stage-specific failure codes             |

/// Success - the run completed and both artifacts were written.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a stage-specific code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments.
pub const EXIT_USAGE: u8 = 2;

/// Input load failed (missing file, bad gzip, malformed CSV).
pub const EXIT_LOAD: u8 = 3;

/// Join query failed (schema mismatch between assumed and actual
/// input shape, SQL error).
pub const EXIT_QUERY: u8 = 4;

/// Scoring failed (field required by the branch logic is absent).
pub const EXIT_SCORE: u8 = 5;

/// Output write or compression failed (disk full, permissions).
pub const EXIT_WRITE: u8 = 6;
