use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{TabularError, TabularRow};

/// Read every row from a tabular file on disk.
pub fn read_rows(path: &Path) -> Result<Vec<TabularRow>, TabularError> {
    let file = File::open(path).map_err(|source| TabularError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let rows = read_rows_from(file)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Read tabular file");
    Ok(rows)
}

/// Read every row from any reader. The first record is the header row.
pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<TabularRow>, TabularError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    csv_reader
        .deserialize::<TabularRow>()
        .map(|row| row.map_err(TabularError::from))
        .collect()
}
