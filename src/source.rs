use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::sample::DEFAULT_MAX_BYTES;
use std::fs;
use std::path::Path;

/// Input to a parse: uploaded bytes with their file name, or a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An uploaded or local file. The name decides the format.
    File { name: String, bytes: Vec<u8> },
    /// A remote `http://` or `https://` resource.
    Url(String),
}

impl Source {
    /// Build a file source from in-memory bytes.
    pub fn file(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Source::File {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Build a URL source.
    pub fn url(url: impl Into<String>) -> Self {
        Source::Url(url.into())
    }

    /// Read a local file into a file source, capped at
    /// [`DEFAULT_MAX_BYTES`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_limited(path, DEFAULT_MAX_BYTES)
    }

    /// Read a local file into a file source. The extension and the size
    /// on disk are checked before any content is read.
    pub fn from_path_limited<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<Self> {
        let path = path.as_ref();
        let name = path.to_string_lossy();
        SourceFormat::from_name(&name)?;

        let size = fs::metadata(path)?.len();
        if size > max_bytes {
            return Err(IngestError::OversizedInput {
                size,
                limit: max_bytes,
            });
        }

        let bytes = fs::read(path)?;
        Ok(Source::file(name, bytes))
    }

    /// Interpret a command-line argument: http(s) URLs become URL
    /// sources, anything else is read from disk.
    pub fn from_arg(arg: &str) -> Result<Self> {
        if Self::is_url(arg) {
            Ok(Source::url(arg))
        } else {
            Self::from_path(arg)
        }
    }

    /// Returns true if `arg` would be treated as a URL source.
    pub fn is_url(arg: &str) -> bool {
        is_http_url(arg)
    }

    /// File name or URL, for messages.
    pub fn label(&self) -> &str {
        match self {
            Source::File { name, .. } => name,
            Source::Url(url) => url,
        }
    }
}

/// Returns true if `s` starts with an `http://` or `https://` scheme.
pub(crate) fn is_http_url(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
