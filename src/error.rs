//! Errors raised while scanning a fragmentation log or drawing its chart

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragLogError {
    #[error("cannot open log file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading {} at line {line_number}: {source}", path.display())]
    Read {
        path: PathBuf,
        line_number: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_number}: trailing field '{token}' is not a number: {line}")]
    Parse {
        line_number: usize,
        line: String,
        token: String,
    },

    #[error("line {line_number}: marked line has no value field")]
    MissingValue { line_number: usize },

    #[error("chart error: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, FragLogError>;
