//! Error type for argument handling and range resolution.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaysError {
    #[error("wrong number of arguments: {0}")]
    ArgCount(usize),

    #[error("error parsing date {0:?}: expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("error parsing date {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("error parsing date or delta {0:?}")]
    InvalidDateOrDelta(String),

    #[error("delta of {delta} days is out of the supported date range")]
    DeltaOutOfRange { delta: i64 },

    #[error("error writing output: {0}")]
    Io(#[from] std::io::Error),
}

impl DaysError {
    /// Whether the usage line should accompany the message.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, DaysError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, DaysError>;
