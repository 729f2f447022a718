use std::path::Path;

use chrono_tz::Tz;

use crate::source::{FetchOptions, SourceClient};
use crate::sync::{ExportSummary, ProgressCallback, SyncError, SyncProgress, emit};
use crate::tabular::{row_from_source, write_rows};

/// Export every repository of the authenticated principal to a tabular file.
///
/// Language histograms are always fetched for the export, so the tech stack
/// column lists every language and not just the primary one.
pub async fn export_repositories<S: SourceClient + ?Sized>(
    source: &S,
    path: &Path,
    zone: Tz,
    on_progress: Option<&ProgressCallback>,
) -> Result<ExportSummary, SyncError> {
    let options = FetchOptions {
        include_languages: true,
    };
    let repos = source.list_repositories(&options, on_progress).await?;

    let rows: Vec<_> = repos.iter().map(|repo| row_from_source(repo, zone)).collect();
    write_rows(path, &rows)?;

    emit(
        on_progress,
        SyncProgress::Exported {
            path: path.display().to_string(),
            rows: rows.len(),
        },
    );

    Ok(ExportSummary { rows: rows.len() })
}
