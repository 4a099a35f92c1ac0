use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a conversion. None of these are recovered
/// locally: the CLI prints the message and exits with status 1.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input could not be read or output could not be written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not JSON, or not shaped like a test-result document
    #[error("Invalid result json ({context}): {source}")]
    MalformedInput {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level `testResults` array is present but empty
    #[error("Invalid result json: {} contains no test results", .path.display())]
    EmptyResults { path: PathBuf },

    /// A required field is absent from a file or case entry
    #[error("Missing field '{field}' in {context}")]
    MissingField { field: &'static str, context: String },

    /// Required command-line flag was not given
    #[error("{0}")]
    Argument(String),

    /// CSV serialization failed
    #[error("CSV write error ({}): {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn missing(field: &'static str, context: impl Into<String>) -> Self {
        ConvertError::MissingField {
            field,
            context: context.into(),
        }
    }
}
