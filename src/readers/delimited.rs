//! CSV/TSV reader built on the `csv` crate.

use super::normalize_header;
use crate::encoding::decode_text;
use crate::error::{IngestError, Result};
use crate::sample::SampleSize;
use crate::table::Table;
use crate::value::Value;

/// Read delimited text into a table.
///
/// # Arguments
/// * `data` - The raw bytes, in any encoding `decode_text` understands
/// * `delimiter` - Field delimiter (`,` or `\t`)
/// * `sample` - How many data rows to keep
pub fn read_delimited(data: &[u8], delimiter: u8, sample: SampleSize) -> Result<Table> {
    let text = decode_text(data);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let header = records
        .next()
        .ok_or_else(|| IngestError::MalformedContent("file has no header row".to_string()))??;
    let mut table = Table::new(normalize_header(header.iter())?);

    let mut dropped = 0;
    for record in records {
        if sample.is_full(table.num_rows()) {
            break;
        }
        let record = record?;
        dropped += table.push_row(record.iter().map(Value::from_field).collect());
    }

    if dropped > 0 {
        tracing::warn!(dropped, "ignored fields beyond the header width");
    }
    tracing::debug!(
        columns = table.num_columns(),
        rows = table.num_rows(),
        "read delimited table"
    );

    Ok(table)
}
