use reposync::sync::SyncProgress;

/// Logging reporter using tracing for structured output.
pub struct LoggingReporter;

impl LoggingReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, event: SyncProgress) {
        match event {
            SyncProgress::FetchingRepos { source } => {
                tracing::info!(source = %source, "Fetching repositories");
            }

            SyncProgress::FetchedPage {
                page,
                count,
                total_so_far,
            } => {
                tracing::debug!(page, count, total_so_far, "Fetched page");
            }

            SyncProgress::FetchingLanguages { total } => {
                tracing::info!(total, "Fetching language histograms");
            }

            SyncProgress::FetchComplete { total } => {
                tracing::info!(total, "Fetch complete");
            }

            SyncProgress::LoadedRows { path, rows } => {
                tracing::info!(path = %path, rows, "Read tabular file");
            }

            SyncProgress::Exported { path, rows } => {
                tracing::info!(path = %path, rows, "Repository data saved");
            }

            SyncProgress::QueryingDestination => {
                tracing::debug!("Querying destination database");
            }

            SyncProgress::IndexBuilt { indexed, untitled } => {
                tracing::info!(indexed, untitled, "Found existing pages");
            }

            SyncProgress::Skipped { position, reason } => {
                tracing::warn!(position, reason = %reason, "Skipped row");
            }

            SyncProgress::DuplicateName { name } => {
                tracing::warn!(name = %name, "Duplicate repository name in this run");
            }

            SyncProgress::Created { name, dry_run } => {
                tracing::info!(name = %name, dry_run, "Created");
            }

            SyncProgress::Updated {
                name,
                page_id,
                dry_run,
            } => {
                tracing::info!(name = %name, page_id = %page_id, dry_run, "Updated");
            }

            SyncProgress::UpsertError { name, error } => {
                tracing::error!(name = %name, error = %error, "Error processing repository");
            }

            SyncProgress::SyncComplete {
                updated,
                created,
                failed,
                skipped,
            } => {
                tracing::info!(updated, created, failed, skipped, "Sync completed");
            }

            _ => {}
        }
    }
}

impl Default for LoggingReporter {
    fn default() -> Self {
        Self::new()
    }
}
