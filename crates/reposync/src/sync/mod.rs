//! Pipelines and the shared upsert engine.
//!
//! # Module Structure
//!
//! - [`types`] - Core types: `SyncOptions`, `SyncSummary`, `SyncError`
//! - [`progress`] - Progress reporting: `SyncProgress`, `ProgressCallback`, `emit()`
//! - [`engine`] - The upsert engine and the three pipelines built on it
//!
//! # Example
//!
//! ```ignore
//! use reposync::sync::{SyncOptions, sync_direct};
//!
//! let summary = sync_direct(&github, &notion, &database_id, zone, &SyncOptions::default(), None).await?;
//! println!("Updated: {}, Created: {}", summary.updated, summary.created);
//! ```

pub mod engine;
mod progress;
mod types;

pub use types::{ExportSummary, SyncError, SyncOptions, SyncSummary, UpsertAction};

pub use progress::{ProgressCallback, SyncProgress, emit};

pub use engine::{
    export_repositories, import_rows, import_tabular, sync_direct, upsert_one, upsert_records,
};
