use std::path::Path;

use chrono_tz::Tz;

use crate::destination::Destination;
use crate::mapping::record_from_row;
use crate::sync::{
    ProgressCallback, SyncError, SyncOptions, SyncProgress, SyncSummary, emit, upsert_records,
};
use crate::tabular::{TabularRow, read_rows};

/// Import a tabular file into the destination.
///
/// The file is read in full before the destination is contacted, so a
/// missing or malformed file fails without any network traffic.
pub async fn import_tabular<D: Destination + ?Sized>(
    destination: &D,
    collection_id: &str,
    path: &Path,
    zone: Tz,
    options: &SyncOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<SyncSummary, SyncError> {
    let rows = read_rows(path)?;
    emit(
        on_progress,
        SyncProgress::LoadedRows {
            path: path.display().to_string(),
            rows: rows.len(),
        },
    );

    import_rows(destination, collection_id, &rows, zone, options, on_progress).await
}

/// Map already-parsed rows and upsert them.
///
/// Rows without a repository name are skipped and counted.
pub async fn import_rows<D: Destination + ?Sized>(
    destination: &D,
    collection_id: &str,
    rows: &[TabularRow],
    zone: Tz,
    options: &SyncOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<SyncSummary, SyncError> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for (i, row) in rows.iter().enumerate() {
        match record_from_row(row, zone) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                emit(
                    on_progress,
                    SyncProgress::Skipped {
                        position: i + 1,
                        reason: "empty repository name".to_string(),
                    },
                );
            }
        }
    }

    let mut summary =
        upsert_records(destination, collection_id, &records, options, on_progress).await?;
    summary.skipped = skipped;

    emit(
        on_progress,
        SyncProgress::SyncComplete {
            updated: summary.updated,
            created: summary.created,
            failed: summary.failed,
            skipped: summary.skipped,
        },
    );

    Ok(summary)
}
