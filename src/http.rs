//! Bounded HTTP download for URL sources.

use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::source::is_http_url;
use std::io::Read;
use std::time::Duration;

/// Content types that are never tabular, whatever the URL says.
const NON_TABULAR_TYPES: &[&str] = &["text/html", "application/xhtml+xml", "application/json"];

/// Result of fetching a URL.
#[derive(Debug)]
pub struct FetchResult {
    /// The body bytes, never more than the requested cap.
    pub data: Vec<u8>,
    /// The response `Content-Type`, if sent.
    pub content_type: Option<String>,
}

impl FetchResult {
    /// Format implied by the response content type.
    pub fn format(&self) -> Option<SourceFormat> {
        self.content_type
            .as_deref()
            .and_then(SourceFormat::from_content_type)
    }
}

fn fetch_error(err: ureq::Error) -> IngestError {
    match err {
        ureq::Error::StatusCode(code) => {
            IngestError::FetchFailure(format!("server returned status {code}"))
        }
        _ => IngestError::FetchFailure(err.to_string()),
    }
}

/// Format named by the last path segment of `url`.
///
/// `Ok(None)` means the path has no extension and the content type must
/// decide. An extension outside csv/tsv/xls/xlsx is rejected here, before
/// any request is made.
pub fn format_from_url(url: &str) -> Result<Option<SourceFormat>> {
    let parsed = url::Url::parse(url)
        .map_err(|e| IngestError::FetchFailure(format!("invalid URL {url}: {e}")))?;
    let segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();

    match segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => SourceFormat::from_extension(ext)
            .map(Some)
            .ok_or_else(|| IngestError::UnsupportedFormat(url.to_string())),
        _ => Ok(None),
    }
}

/// Fetch `url`, refusing bodies larger than `max_bytes`.
pub fn fetch_url(url: &str, max_bytes: u64, timeout: Duration) -> Result<FetchResult> {
    if !is_http_url(url) {
        return Err(IngestError::FetchFailure(format!(
            "URL must start with http:// or https://: {url}"
        )));
    }

    let config = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build();
    let agent = ureq::Agent::new_with_config(config);

    tracing::debug!(url, "fetching dataset");
    let response = agent.get(url).call().map_err(fetch_error)?;

    let content_type = response
        .headers()
        .get("Content-Type")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);

    if let Some(ct) = content_type.as_deref() {
        let lower = ct.to_ascii_lowercase();
        if NON_TABULAR_TYPES.iter().any(|t| lower.starts_with(t)) {
            return Err(IngestError::FetchFailure(format!(
                "expected tabular data but server sent {ct}"
            )));
        }
    }

    let content_length = response
        .headers()
        .get("Content-Length")
        .and_then(|h| h.to_str().ok()?.parse::<u64>().ok());
    if let Some(size) = content_length.filter(|&size| size > max_bytes) {
        return Err(IngestError::OversizedInput {
            size,
            limit: max_bytes,
        });
    }

    // One byte past the cap is enough to tell an oversized body apart
    let mut data = Vec::new();
    response
        .into_body()
        .into_reader()
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut data)
        .map_err(|e| IngestError::FetchFailure(e.to_string()))?;

    if data.len() as u64 > max_bytes {
        return Err(IngestError::OversizedInput {
            size: data.len() as u64,
            limit: max_bytes,
        });
    }

    Ok(FetchResult { data, content_type })
}
