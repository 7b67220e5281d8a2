use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleaningMapError {
    #[error("Failed to read cleaning table '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Cleaning table '{0}' has no records")]
    Empty(PathBuf),

    #[error("Failed to decode line {line} of cleaning table '{path}'")]
    Decode {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Line {line} of cleaning table '{path}' has {found} field(s), expected at least 2")]
    MissingFields {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    #[error("Line {line} of cleaning table '{path}' has a non-integer priority '{value}'")]
    InvalidPriority {
        path: PathBuf,
        line: u64,
        value: String,
    },
}
