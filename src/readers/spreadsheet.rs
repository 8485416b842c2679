//! Excel reader built on `calamine`. Only the first worksheet is read.

use super::normalize_header;
use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::sample::SampleSize;
use crate::table::Table;
use crate::value::Value;
use calamine::{Data, DataType, Range, Reader, Xls, Xlsx};
use std::fmt::Display;
use std::io::{Cursor, Read, Seek};

/// Read the first worksheet of an xls/xlsx workbook into a table.
///
/// Cells keep their native type; nothing is re-parsed from text.
pub fn read_spreadsheet(data: &[u8], format: SourceFormat, sample: SampleSize) -> Result<Table> {
    let cursor = Cursor::new(data);
    let range = match format {
        SourceFormat::Xls => first_sheet::<Xls<_>, _>(cursor)?,
        SourceFormat::Xlsx => first_sheet::<Xlsx<_>, _>(cursor)?,
        SourceFormat::Csv | SourceFormat::Tsv => {
            return Err(IngestError::UnsupportedFormat(format!(
                "{format} is not a spreadsheet format"
            )));
        }
    };

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| IngestError::MalformedContent("worksheet is empty".to_string()))?;
    let mut table = Table::new(normalize_header(
        header.iter().map(|cell| cell_value(cell).to_string()),
    )?);

    for row in rows {
        if sample.is_full(table.num_rows()) {
            break;
        }
        table.push_row(row.iter().map(cell_value).collect());
    }

    tracing::debug!(
        %format,
        columns = table.num_columns(),
        rows = table.num_rows(),
        "read worksheet"
    );

    Ok(table)
}

/// Open a workbook and take its first worksheet.
fn first_sheet<W, RS>(reader: RS) -> Result<Range<Data>>
where
    RS: Read + Seek,
    W: Reader<RS>,
    W::Error: Display,
{
    let mut workbook = W::new(reader).map_err(|e| {
        IngestError::MalformedContent(format!("failed to open workbook: {e}"))
    })?;

    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::MalformedContent("workbook has no worksheet".to_string()))?
        .map_err(|e| IngestError::MalformedContent(format!("failed to read worksheet: {e}")))
}

/// Map a calamine cell onto a [`Value`].
fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::Bool(b) => Value::Bool(*b),
        Data::Int(i) => Value::Number(*i as f64),
        Data::Float(f) => Value::Number(*f),
        Data::String(s) => Value::String(s.clone()),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(Value::DateTime)
            .unwrap_or_else(|| Value::String(cell.to_string())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
    }
}
