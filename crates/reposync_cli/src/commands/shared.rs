use std::sync::Arc;

use reposync::sync::ProgressCallback;

use crate::config::Overrides;
use crate::progress::ProgressReporter;
use crate::{FileOptions, ZoneOptions};

/// Collect CLI overrides for settings validation.
pub(crate) fn overrides(file: Option<FileOptions>, zone: ZoneOptions) -> Overrides {
    Overrides {
        timezone: zone.timezone,
        path: file.and_then(|f| f.file),
    }
}

/// Create a progress reporter for the current terminal and its callback.
pub(crate) fn reporter() -> (Arc<ProgressReporter>, ProgressCallback) {
    let reporter = Arc::new(ProgressReporter::new());
    let callback = reporter.as_callback();
    (reporter, callback)
}
