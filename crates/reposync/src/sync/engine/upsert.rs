use std::collections::HashSet;

use crate::destination::{Destination, DestinationError, DestinationIndex};
use crate::mapping::page_properties;
use crate::record::RepositoryRecord;
use crate::source::short_error_message;

use crate::sync::{
    ProgressCallback, SyncError, SyncOptions, SyncProgress, SyncSummary, UpsertAction, emit,
};

/// Upsert a single record against a prebuilt index.
///
/// Matches by name: an indexed name is updated in place with the full
/// property set, anything else is created under `collection_id`. In a dry run
/// nothing is written.
pub async fn upsert_one<D: Destination + ?Sized>(
    destination: &D,
    collection_id: &str,
    index: &DestinationIndex,
    record: &RepositoryRecord,
    dry_run: bool,
) -> Result<UpsertAction, DestinationError> {
    let properties = page_properties(record);

    match index.get(&record.name) {
        Some(page_id) => {
            if !dry_run {
                destination.update(page_id, &properties).await?;
            }
            Ok(UpsertAction::Updated)
        }
        None => {
            if !dry_run {
                destination.create(collection_id, &properties).await?;
            }
            Ok(UpsertAction::Created)
        }
    }
}

/// Reconcile records against the destination.
///
/// Queries every existing page once, indexes them by title, then upserts the
/// records in order. A failed query aborts before any write; a failed write
/// is counted and the loop moves on.
///
/// Repeated names are processed independently against the same index and
/// reported with [`SyncProgress::DuplicateName`].
pub async fn upsert_records<D: Destination + ?Sized>(
    destination: &D,
    collection_id: &str,
    records: &[RepositoryRecord],
    options: &SyncOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<SyncSummary, SyncError> {
    emit(on_progress, SyncProgress::QueryingDestination);
    let pages = destination
        .query_all(collection_id)
        .await
        .map_err(SyncError::DestinationQuery)?;

    let index = DestinationIndex::build(&pages);
    tracing::debug!(
        pages = pages.len(),
        indexed = index.len(),
        untitled = index.untitled(),
        "Built destination index"
    );
    emit(
        on_progress,
        SyncProgress::IndexBuilt {
            indexed: index.len(),
            untitled: index.untitled(),
        },
    );

    let mut summary = SyncSummary::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for record in records {
        if !seen.insert(record.name.as_str()) {
            emit(
                on_progress,
                SyncProgress::DuplicateName {
                    name: record.name.clone(),
                },
            );
        }

        match upsert_one(destination, collection_id, &index, record, options.dry_run).await {
            Ok(UpsertAction::Updated) => {
                summary.updated += 1;
                emit(
                    on_progress,
                    SyncProgress::Updated {
                        name: record.name.clone(),
                        page_id: index.get(&record.name).unwrap_or_default().to_string(),
                        dry_run: options.dry_run,
                    },
                );
            }
            Ok(UpsertAction::Created) => {
                summary.created += 1;
                emit(
                    on_progress,
                    SyncProgress::Created {
                        name: record.name.clone(),
                        dry_run: options.dry_run,
                    },
                );
            }
            Err(e) => {
                tracing::debug!(name = %record.name, error = %e, "Upsert failed");
                summary.failed += 1;
                summary.errors.push(format!("{}: {}", record.name, e));
                emit(
                    on_progress,
                    SyncProgress::UpsertError {
                        name: record.name.clone(),
                        error: short_error_message(&e),
                    },
                );
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::destination::{self, DestinationPage};
    use crate::mapping::PropertyBag;
    use crate::record::{Privacy, Status};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(String),
        Update(String),
    }

    #[derive(Default)]
    struct Recorder {
        pages: Vec<DestinationPage>,
        calls: Mutex<Vec<Call>>,
        fail_query: bool,
    }

    fn titled(id: &str, title: &str) -> DestinationPage {
        let mut properties = PropertyBag::new();
        properties.insert(
            "Name".into(),
            json!({ "title": [{ "plain_text": title }] }),
        );
        DestinationPage {
            id: id.to_string(),
            properties,
        }
    }

    #[async_trait]
    impl Destination for Recorder {
        async fn query_all(&self, _: &str) -> destination::Result<Vec<DestinationPage>> {
            if self.fail_query {
                return Err(DestinationError::AuthRequired);
            }
            Ok(self.pages.clone())
        }

        async fn create(&self, _: &str, props: &PropertyBag) -> destination::Result<String> {
            let name = crate::mapping::title_of(props).unwrap_or_default();
            self.calls.lock().unwrap().push(Call::Create(name));
            Ok("new".to_string())
        }

        async fn update(&self, page_id: &str, _: &PropertyBag) -> destination::Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Update(page_id.to_string()));
            Ok(())
        }
    }

    fn record(name: &str) -> RepositoryRecord {
        RepositoryRecord::new(name, Status::InProgress, Privacy::Public).unwrap()
    }

    #[tokio::test]
    async fn test_indexed_names_update_with_page_id() {
        let dest = Recorder {
            pages: vec![titled("page-1", "repo-a")],
            ..Recorder::default()
        };
        let index = DestinationIndex::build(&dest.pages);

        let action = upsert_one(&dest, "db", &index, &record("repo-a"), false)
            .await
            .unwrap();
        assert_eq!(action, UpsertAction::Updated);
        assert_eq!(
            *dest.calls.lock().unwrap(),
            vec![Call::Update("page-1".to_string())]
        );
    }

    #[tokio::test]
    async fn test_unindexed_names_create() {
        let dest = Recorder::default();
        let index = DestinationIndex::build(&[]);

        let action = upsert_one(&dest, "db", &index, &record("repo-b"), false)
            .await
            .unwrap();
        assert_eq!(action, UpsertAction::Created);
        assert_eq!(
            *dest.calls.lock().unwrap(),
            vec![Call::Create("repo-b".to_string())]
        );
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let dest = Recorder {
            pages: vec![titled("page-1", "repo-a")],
            ..Recorder::default()
        };
        let options = SyncOptions {
            dry_run: true,
            ..SyncOptions::default()
        };

        let records = [record("repo-a"), record("repo-b")];
        let summary = upsert_records(&dest, "db", &records, &options, None)
            .await
            .unwrap();
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.created, 1);
        assert!(dest.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_failure_is_fatal() {
        let dest = Recorder {
            fail_query: true,
            ..Recorder::default()
        };
        let options = SyncOptions::default();
        let err = upsert_records(&dest, "db", &[record("repo-a")], &options, None)
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::DestinationQuery(_)));
        assert!(dest.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_names_are_reported_and_processed() {
        let dest = Recorder::default();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let callback: ProgressCallback = Box::new(move |event| {
            if let SyncProgress::DuplicateName { name } = event {
                sink.lock().unwrap().push(name);
            }
        });

        let summary = upsert_records(
            &dest,
            "db",
            &[record("repo-a"), record("repo-a")],
            &SyncOptions::default(),
            Some(&callback),
        )
        .await
        .unwrap();

        // Both occurrences miss the point-in-time index
        assert_eq!(summary.created, 2);
        assert_eq!(*events.lock().unwrap(), vec!["repo-a".to_string()]);
    }
}
