use std::fs::File;
use std::io;
use std::path::Path;

use shopdump_core::{ProductRecord, PRODUCT_COLUMNS};

use crate::error::ExportError;

/// Writes `records` to a CSV file at `path` and returns the number of rows
/// written.
///
/// An empty `records` slice performs no I/O at all: the destination is not
/// created, truncated or touched, and `Ok(0)` is returned.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created, or
/// [`ExportError::Csv`] if a row cannot be written.
pub fn save(records: &[ProductRecord], path: &Path) -> Result<usize, ExportError> {
    if records.is_empty() {
        tracing::debug!(path = %path.display(), "no records to export; skipping write");
        return Ok(0);
    }

    let file = File::create(path).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let written = write_records(records, file)?;
    tracing::debug!(path = %path.display(), rows = written, "export file written");
    Ok(written)
}

/// Writes the header row followed by one row per record to `writer`.
///
/// Columns are `id,title,price,tags,collections,sale`. Fields containing the
/// delimiter, quotes or line breaks are quoted; `sale` renders as `true` or
/// `false`. Returns the number of data rows written.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if serialization or the underlying writer
/// fails.
pub fn write_records<W: io::Write>(
    records: &[ProductRecord],
    writer: W,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(PRODUCT_COLUMNS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;

    Ok(records.len())
}
