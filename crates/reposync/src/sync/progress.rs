//! Progress reporting types for sync operations.
//!
//! The pipelines never print. They emit [`SyncProgress`] events through an
//! optional callback and the caller decides how to render them.

/// Progress events emitted by the exporter, importer and syncer.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum SyncProgress {
    /// Starting to enumerate repositories on the source platform.
    FetchingRepos {
        /// Platform name.
        source: String,
    },

    /// Fetched a page of repositories.
    FetchedPage {
        /// Page number (1-indexed).
        page: u32,
        /// Number of repos on this page.
        count: usize,
        /// Running total of repos fetched so far.
        total_so_far: usize,
    },

    /// Fetching per-repository language histograms.
    FetchingLanguages {
        /// Number of repositories to query.
        total: usize,
    },

    /// Finished enumerating repositories.
    FetchComplete {
        /// Total number of repositories fetched.
        total: usize,
    },

    /// Read rows from a tabular file.
    LoadedRows {
        /// File path.
        path: String,
        /// Number of data rows.
        rows: usize,
    },

    /// Wrote the export file.
    Exported {
        /// File path.
        path: String,
        /// Number of data rows.
        rows: usize,
    },

    /// Querying the destination for existing pages.
    QueryingDestination,

    /// Destination index is ready.
    IndexBuilt {
        /// Number of indexed names.
        indexed: usize,
        /// Pages left out for lack of a title.
        untitled: usize,
    },

    /// A source row was skipped before mapping.
    Skipped {
        /// 1-indexed position of the row in its source.
        position: usize,
        /// Why it was skipped.
        reason: String,
    },

    /// A name occurs more than once in this run's records.
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// A page was created (or would be, in a dry run).
    Created {
        /// Repository name.
        name: String,
        /// Whether this is a dry run.
        dry_run: bool,
    },

    /// A page was updated (or would be, in a dry run).
    Updated {
        /// Repository name.
        name: String,
        /// Destination page id.
        page_id: String,
        /// Whether this is a dry run.
        dry_run: bool,
    },

    /// Creating or updating a page failed. The run continues.
    UpsertError {
        /// Repository name.
        name: String,
        /// Error message.
        error: String,
    },

    /// All records processed.
    SyncComplete {
        /// Pages updated.
        updated: usize,
        /// Pages created.
        created: usize,
        /// Records that failed.
        failed: usize,
        /// Rows skipped before mapping.
        skipped: usize,
    },
}

/// Callback for progress updates during sync operations.
pub type ProgressCallback = Box<dyn Fn(SyncProgress) + Send + Sync>;

/// Emit a progress event if a callback is provided.
///
/// ```ignore
/// use reposync::sync::{emit, SyncProgress, ProgressCallback};
///
/// fn my_sync(on_progress: Option<&ProgressCallback>) {
///     emit(on_progress, SyncProgress::FetchComplete { total: 42 });
/// }
/// ```
#[inline]
pub fn emit(on_progress: Option<&ProgressCallback>, event: SyncProgress) {
    if let Some(cb) = on_progress {
        cb(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_emit_with_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);

        let callback: ProgressCallback = Box::new(move |_event| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        emit(Some(&callback), SyncProgress::FetchComplete { total: 10 });
        emit(Some(&callback), SyncProgress::QueryingDestination);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_emit_without_callback() {
        // Should not panic when callback is None
        emit(None, SyncProgress::FetchComplete { total: 10 });
    }

    #[test]
    fn test_sync_progress_debug() {
        let event = SyncProgress::UpsertError {
            name: "repo-a".to_string(),
            error: "validation_error".to_string(),
        };

        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("UpsertError"));
        assert!(debug_str.contains("repo-a"));
        assert!(debug_str.contains("validation_error"));
    }
}
