//! Ingestor builder and parse methods.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::readers::delimited::read_delimited;
use crate::readers::spreadsheet::read_spreadsheet;
use crate::sample::{DEFAULT_MAX_BYTES, SampleSize};
use crate::source::Source;
use crate::table::Table;

/// Default timeout for URL fetches (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Turns uploaded files and dataset URLs into bounded preview tables.
///
/// # Example
///
/// ```no_run
/// use tabular_preview::{Ingestor, SampleSize};
///
/// let mut ingestor = Ingestor::new();
/// ingestor.sample_size(SampleSize::Records(10));
///
/// let table = ingestor.parse_path("data.csv").unwrap();
/// println!("Columns: {:?}", table.columns());
/// println!("Rows: {}", table.num_rows());
/// ```
#[derive(Debug, Clone)]
pub struct Ingestor {
    /// Data rows kept per parse.
    sample_size: SampleSize,
    /// Largest accepted input, in bytes.
    max_bytes: u64,
    /// Timeout for URL fetches.
    timeout: Duration,
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

impl Ingestor {
    /// Create a new Ingestor with default settings.
    pub fn new() -> Self {
        Self {
            sample_size: SampleSize::default(),
            max_bytes: DEFAULT_MAX_BYTES,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set how many data rows to keep.
    pub fn sample_size(&mut self, sample_size: SampleSize) -> &mut Self {
        self.sample_size = sample_size;
        self
    }

    /// Set the largest accepted input size in bytes.
    pub fn max_bytes(&mut self, max_bytes: u64) -> &mut Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Set the timeout for URL fetches.
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Parse any source into a table.
    pub fn parse(&self, source: &Source) -> Result<Table> {
        match source {
            Source::File { name, bytes } => self.parse_bytes(name, bytes),
            Source::Url(url) => self.parse_url(url),
        }
    }

    /// Parse a local file, checking format and size before reading it.
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let path = path.as_ref();
        let format = SourceFormat::from_name(&path.to_string_lossy())?;
        self.check_size(fs::metadata(path)?.len())?;
        self.parse_format(&fs::read(path)?, format)
    }

    /// Parse uploaded bytes; `name` picks the format by extension.
    pub fn parse_bytes(&self, name: &str, data: &[u8]) -> Result<Table> {
        let format = SourceFormat::from_name(name)?;
        self.check_size(data.len() as u64)?;
        self.parse_format(data, format)
    }

    /// Fetch and parse a dataset URL.
    #[cfg(feature = "http")]
    pub fn parse_url(&self, url: &str) -> Result<Table> {
        use crate::http::{fetch_url, format_from_url};

        let named = format_from_url(url)?;
        let fetched = fetch_url(url, self.max_bytes, self.timeout)?;
        let format = named
            .or_else(|| fetched.format())
            .ok_or_else(|| IngestError::UnsupportedFormat(url.to_string()))?;

        self.parse_format(&fetched.data, format)
    }

    /// URL sources need the `http` feature.
    #[cfg(not(feature = "http"))]
    pub fn parse_url(&self, url: &str) -> Result<Table> {
        Err(IngestError::FetchFailure(format!(
            "cannot fetch {url}: built without HTTP support"
        )))
    }

    /// Parse bytes already known to be in `format`.
    pub fn parse_format(&self, data: &[u8], format: SourceFormat) -> Result<Table> {
        self.check_size(data.len() as u64)?;
        match format.delimiter() {
            Some(delimiter) => read_delimited(data, delimiter, self.sample_size),
            None => read_spreadsheet(data, format, self.sample_size),
        }
    }

    fn check_size(&self, size: u64) -> Result<()> {
        if size > self.max_bytes {
            return Err(IngestError::OversizedInput {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// Parse `source` with default settings.
pub fn parse(source: &Source) -> Result<Table> {
    Ingestor::new().parse(source)
}
