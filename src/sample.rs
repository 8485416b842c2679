/// Rows shown in the inline dataset preview.
pub const PREVIEW_ROWS: usize = 10;

/// Rows shown in the preview dialog before confirming an upload.
pub const DIALOG_ROWS: usize = 20;

/// Rows kept for classification and chart sampling of an active dataset.
pub const ANALYSIS_ROWS: usize = 500;

/// Default byte cap for a single input (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Number of data rows retained from a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSize {
    /// Keep at most this many data rows.
    Records(usize),
    /// Keep every row.
    ///
    /// # Warning
    ///
    /// The byte cap still applies, but every row of an accepted input is
    /// materialized. Prefer [`SampleSize::Records`] for previews.
    All,
}

impl Default for SampleSize {
    fn default() -> Self {
        SampleSize::Records(DIALOG_ROWS)
    }
}

impl SampleSize {
    /// Returns the row cap, or None for All.
    pub fn records(&self) -> Option<usize> {
        match self {
            SampleSize::Records(n) => Some(*n),
            SampleSize::All => None,
        }
    }

    /// Returns true once `taken` rows satisfy this sample size.
    #[inline]
    pub fn is_full(&self, taken: usize) -> bool {
        matches!(self, SampleSize::Records(n) if taken >= *n)
    }
}
