//! Source format detection from file names, URL paths and content types.

use crate::error::{IngestError, Result};
use std::fmt;
use std::path::Path;

/// Supported tabular formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
    /// Legacy Excel workbook (BIFF).
    Xls,
    /// Office Open XML workbook.
    Xlsx,
}

impl SourceFormat {
    /// Resolve a format from a lower-cased or mixed-case extension
    /// (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(SourceFormat::Csv),
            "tsv" => Some(SourceFormat::Tsv),
            "xls" => Some(SourceFormat::Xls),
            "xlsx" => Some(SourceFormat::Xlsx),
            _ => None,
        }
    }

    /// Resolve a format from a file name, rejecting anything else.
    pub fn from_name(name: &str) -> Result<Self> {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| IngestError::UnsupportedFormat(name.to_string()))
    }

    /// Resolve a format from an HTTP `Content-Type` header value.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match mime.as_str() {
            "text/csv" | "application/csv" => Some(SourceFormat::Csv),
            "text/tab-separated-values" => Some(SourceFormat::Tsv),
            "application/vnd.ms-excel" => Some(SourceFormat::Xls),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(SourceFormat::Xlsx)
            }
            _ => None,
        }
    }

    /// Field delimiter for delimited-text formats.
    #[inline]
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            SourceFormat::Csv => Some(b','),
            SourceFormat::Tsv => Some(b'\t'),
            SourceFormat::Xls | SourceFormat::Xlsx => None,
        }
    }

    /// Returns true for workbook formats.
    #[inline]
    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, SourceFormat::Xls | SourceFormat::Xlsx)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Tsv => write!(f, "tsv"),
            SourceFormat::Xls => write!(f, "xls"),
            SourceFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}
