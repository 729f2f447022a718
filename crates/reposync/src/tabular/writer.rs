use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{TabularError, TabularRow};

/// Write rows to a tabular file on disk, replacing any existing file.
pub fn write_rows(path: &Path, rows: &[TabularRow]) -> Result<(), TabularError> {
    let file = File::create(path).map_err(|source| TabularError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_rows_to(file, rows)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Wrote tabular file");
    Ok(())
}

/// Write rows to any writer, header row first.
pub fn write_rows_to<W: Write>(writer: W, rows: &[TabularRow]) -> Result<(), TabularError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty export still carries the header.
    csv_writer.write_record(super::HEADERS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(|source| TabularError::Io {
        path: "<writer>".to_string(),
        source,
    })?;
    Ok(())
}
