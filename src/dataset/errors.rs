use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("Prefix table has no header line")]
    MissingHeader,

    #[error("Required column '{column}' is missing from the header")]
    MissingColumn { column: &'static str },

    #[error("Line {line}: {source}")]
    InvalidRecord {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Line {line}: prefix '{number_prefix}' {reason}")]
    InconsistentRecord {
        line: u64,
        number_prefix: String,
        reason: &'static str,
    },
}
