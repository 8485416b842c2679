//! tabular-preview: bounded previews and column classification for
//! uploaded datasets
//!
//! Turns a CSV, TSV or Excel upload (or a dataset URL) into a small
//! in-memory [`Table`], then sorts its columns into numeric, categorical,
//! datetime and text groups so a dashboard can decide which analysis
//! views to offer.
//!
//! # Quick Start
//!
//! ```no_run
//! use tabular_preview::{Ingestor, SampleSize, classify, enabled_views};
//!
//! let mut ingestor = Ingestor::new();
//! ingestor.sample_size(SampleSize::Records(10));
//!
//! let table = ingestor.parse_path("data.csv").unwrap();
//! let classes = classify(&table);
//!
//! println!("Columns: {:?}", table.columns());
//! println!("Numeric: {:?}", classes.numeric);
//! println!("Views: {:?}", enabled_views(&classes));
//! ```
//!
//! # Limits
//!
//! Inputs larger than [`DEFAULT_MAX_BYTES`] are rejected before they are
//! read, and only the first [`SampleSize`] data rows are kept. Both can be
//! changed on the [`Ingestor`].
//!
//! URL sources need the `http` feature (on by default).

mod classify;
mod encoding;
mod error;
mod format;
mod gating;
#[cfg(feature = "http")]
mod http;
mod ingestor;
mod readers;
mod sample;
mod session;
mod source;
mod table;
mod value;

pub use classify::{
    Classifier, ColumnClassification, ColumnKind, DEFAULT_TEXT_THRESHOLD, classify,
};
pub use error::{IngestError, Result};
pub use format::SourceFormat;
pub use gating::{AnalysisView, enabled_views};
pub use ingestor::{DEFAULT_TIMEOUT, Ingestor, parse};
pub use sample::{ANALYSIS_ROWS, DEFAULT_MAX_BYTES, DIALOG_ROWS, PREVIEW_ROWS, SampleSize};
pub use session::{
    ActiveDataset, PreviewOutcome, PreviewState, RequestToken, SessionState, spawn_preview,
};
pub use source::Source;
pub use table::{Row, Table};
pub use value::{Value, parse_number};

// Re-export for advanced usage
pub use encoding::{decode_text, is_utf8};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api() {
        let _ingestor = Ingestor::new();
        let _classifier = Classifier::new();
        let _sample = SampleSize::Records(PREVIEW_ROWS);
        let _session = SessionState::new();
        let _preview = PreviewState::new();
        let _view = AnalysisView::Overview;
    }

    #[test]
    fn test_parse_and_classify() {
        let data = b"id,name,signup_date\n1,Alice,2023-01-01\n2,Bob,2023-02-01\n";
        let table = parse(&Source::file("users.csv", data.to_vec())).unwrap();
        let classes = classify(&table);

        assert_eq!(classes.numeric, vec!["id"]);
        assert_eq!(classes.datetime, vec!["signup_date"]);
        assert_eq!(classes.categorical, vec!["name"]);
        assert!(classes.text.is_empty());
    }

    #[test]
    fn test_builder_pattern() {
        let mut ingestor = Ingestor::new();
        ingestor
            .sample_size(SampleSize::Records(ANALYSIS_ROWS))
            .max_bytes(DEFAULT_MAX_BYTES)
            .timeout(DEFAULT_TIMEOUT);

        let mut classifier = Classifier::new();
        classifier.text_threshold(DEFAULT_TEXT_THRESHOLD).date_hint("period");

        // Verify builders return &mut Self for chaining
    }
}
