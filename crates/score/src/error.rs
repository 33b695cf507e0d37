use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum ScoreError {
    /// A field required by the selected scoring branch is absent.
    MissingField { row: usize, field: &'static str },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { row, field } => {
                write!(f, "result row {row}: missing value for {field}")
            }
        }
    }
}

impl std::error::Error for ScoreError {}
