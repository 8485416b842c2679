use std::io;
use thiserror::Error;

/// Error type for tabular ingestion.
///
/// Every variant renders as a message suitable for showing to the person
/// who picked the input. None of them are retried automatically.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The file or URL extension is not one of csv, tsv, xls or xlsx.
    #[error("Unsupported file type: {0}. Please upload a CSV, TSV, or Excel file.")]
    UnsupportedFormat(String),

    /// The input is larger than the configured byte cap.
    #[error("File is too large ({size} bytes). Maximum allowed size is {limit} bytes.")]
    OversizedInput { size: u64, limit: u64 },

    /// The URL could not be fetched, or did not return tabular content.
    #[error("Could not fetch dataset: {0}")]
    FetchFailure(String),

    /// No consistent header/row structure could be read.
    #[error("Could not read table: {0}")]
    MalformedContent(String),

    /// IO error while reading a local file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::MalformedContent(err.to_string())
    }
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
