//! Format-specific readers that turn raw bytes into a [`Table`](crate::Table).
//!
//! Both readers take the first row as the header and keep at most the
//! requested number of data rows.

pub mod delimited;
pub mod spreadsheet;

use crate::error::{IngestError, Result};

/// Trim header names and reject a header with no usable name at all.
fn normalize_header<I>(names: I) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let columns: Vec<String> = names
        .into_iter()
        .map(|name| name.as_ref().trim().to_string())
        .collect();

    if columns.iter().all(String::is_empty) {
        return Err(IngestError::MalformedContent(
            "header row has no column names".to_string(),
        ));
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        let columns = normalize_header([" id ", "name", "", "name"]).unwrap();
        assert_eq!(columns, vec!["id", "name", "", "name"]);
    }

    #[test]
    fn test_normalize_header_all_blank() {
        assert!(matches!(
            normalize_header(["", "  "]),
            Err(IngestError::MalformedContent(_))
        ));
        assert!(normalize_header(Vec::<String>::new()).is_err());
    }
}
