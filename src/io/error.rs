use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("malformed {format} document: {source}")]
    Json {
        format: Format,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read or write tabular data: {0}")]
    Csv(#[from] csv::Error),

    #[error("{format} data is missing required column '{column}'")]
    MissingColumn { format: Format, column: String },

    #[error("{format} field '{field}' must be a number")]
    NonNumericField { format: Format, field: &'static str },
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }

    pub fn json(format: Format, source: serde_json::Error) -> Self {
        Self::Json { format, source }
    }

    pub fn missing_column(format: Format, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            format,
            column: column.into(),
        }
    }
}
