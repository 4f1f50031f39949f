use std::path::PathBuf;

/// Fatal at startup: the service must not run on a missing or corrupt dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("invalid record on line {line} ({company}): {reason}")]
    InvalidRecord {
        line: u64,
        company: String,
        reason: String,
    },

    #[error("duplicate company name: {0}")]
    DuplicateCompany(String),

    #[error("dataset contains no companies")]
    Empty,
}
