//! Shared sync types.

use thiserror::Error;

use crate::destination::DestinationError;
use crate::source::SourceError;
use crate::tabular::TabularError;

/// Options shared by the importer and the direct syncer.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Resolve create vs update against the real index, but write nothing.
    pub dry_run: bool,
    /// Direct path only: build the tech stack from the full language
    /// histogram instead of the primary language.
    pub include_languages: bool,
}

/// Outcome of a single upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    Created,
    Updated,
}

/// Aggregate result of an import or sync run.
#[derive(Debug, Default)]
pub struct SyncSummary {
    /// Pages updated.
    pub updated: usize,
    /// Pages created.
    pub created: usize,
    /// Records whose create/update failed.
    pub failed: usize,
    /// Rows dropped before mapping (e.g. blank name).
    pub skipped: usize,
    /// Per-record failures as `name: message`.
    pub errors: Vec<String>,
}

/// Result of an export run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Rows written.
    pub rows: usize,
}

/// Fatal errors that abort a pipeline.
///
/// Per-record upsert failures never surface here; they are counted in
/// [`SyncSummary`].
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to fetch repositories: {0}")]
    Source(#[from] SourceError),

    #[error("Failed to query destination: {0}")]
    DestinationQuery(#[source] DestinationError),

    #[error(transparent)]
    Tabular(#[from] TabularError),
}
