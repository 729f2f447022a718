use chrono_tz::Tz;

use crate::destination::Destination;
use crate::mapping::record_from_source;
use crate::source::{FetchOptions, SourceClient};
use crate::sync::{
    ProgressCallback, SyncError, SyncOptions, SyncProgress, SyncSummary, emit, upsert_records,
};

/// Sync repositories straight from the source platform into the destination.
///
/// Source enumeration happens first; a source failure aborts before the
/// destination is queried.
pub async fn sync_direct<S, D>(
    source: &S,
    destination: &D,
    collection_id: &str,
    zone: Tz,
    options: &SyncOptions,
    on_progress: Option<&ProgressCallback>,
) -> Result<SyncSummary, SyncError>
where
    S: SourceClient + ?Sized,
    D: Destination + ?Sized,
{
    let fetch = FetchOptions {
        include_languages: options.include_languages,
    };
    let repos = source.list_repositories(&fetch, on_progress).await?;

    let mut records = Vec::with_capacity(repos.len());
    let mut skipped = 0;
    for (i, repo) in repos.iter().enumerate() {
        match record_from_source(repo, zone) {
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

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::destination::{self, DestinationPage};
    use crate::mapping::PropertyBag;
    use crate::source::{self, SourceError, SourceRepo};

    struct StaticSource {
        repos: Vec<SourceRepo>,
        seen_options: Mutex<Option<bool>>,
    }

    #[async_trait]
    impl SourceClient for StaticSource {
        fn platform_name(&self) -> &'static str {
            "static"
        }

        async fn list_repositories(
            &self,
            options: &FetchOptions,
            _on_progress: Option<&ProgressCallback>,
        ) -> source::Result<Vec<SourceRepo>> {
            *self.seen_options.lock().unwrap() = Some(options.include_languages);
            if self.repos.is_empty() {
                return Err(SourceError::network("connection refused"));
            }
            Ok(self.repos.clone())
        }
    }

    #[derive(Default)]
    struct CollectingDestination {
        queried: Mutex<bool>,
        created: Mutex<Vec<PropertyBag>>,
    }

    #[async_trait]
    impl Destination for CollectingDestination {
        async fn query_all(&self, _: &str) -> destination::Result<Vec<DestinationPage>> {
            *self.queried.lock().unwrap() = true;
            Ok(Vec::new())
        }

        async fn create(&self, _: &str, props: &PropertyBag) -> destination::Result<String> {
            self.created.lock().unwrap().push(props.clone());
            Ok("page".to_string())
        }

        async fn update(&self, _: &str, _: &PropertyBag) -> destination::Result<()> {
            Ok(())
        }
    }

    fn source(repos: Vec<SourceRepo>) -> StaticSource {
        StaticSource {
            repos,
            seen_options: Mutex::new(None),
        }
    }

    #[tokio::test]
    async fn test_sync_direct_maps_with_direct_tables() {
        let src = source(vec![SourceRepo {
            name: "repo-a".to_string(),
            owner: "octocat".to_string(),
            is_archived: true,
            is_private: true,
            language: Some("Rust".to_string()),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 15, 30, 0).unwrap()),
            ..SourceRepo::default()
        }]);
        let dest = CollectingDestination::default();
        let zone: Tz = "Asia/Tokyo".parse().unwrap();

        let summary = sync_direct(&src, &dest, "db", zone, &SyncOptions::default(), None)
            .await
            .unwrap();
        assert_eq!(summary.created, 1);
        assert_eq!(*src.seen_options.lock().unwrap(), Some(false));

        let created = dest.created.lock().unwrap();
        let props = &created[0];
        assert_eq!(props["Status"]["status"]["name"], "完了");
        assert_eq!(props["Privacy"]["select"]["name"], "Private");
        assert_eq!(
            props["Last Updated"]["date"]["start"],
            "2024-03-02T00:30:00+09:00"
        );
        assert_eq!(props["Tech Stack"]["multi_select"][0]["name"], "Rust");
    }

    #[tokio::test]
    async fn test_sync_direct_forwards_language_option() {
        let src = source(vec![SourceRepo {
            name: "repo-a".to_string(),
            ..SourceRepo::default()
        }]);
        let dest = CollectingDestination::default();
        let options = SyncOptions {
            include_languages: true,
            ..SyncOptions::default()
        };
        sync_direct(&src, &dest, "db", chrono_tz::UTC, &options, None)
            .await
            .unwrap();
        assert_eq!(*src.seen_options.lock().unwrap(), Some(true));
    }

    #[tokio::test]
    async fn test_source_failure_aborts_before_destination_query() {
        let src = source(Vec::new());
        let dest = CollectingDestination::default();
        let err = sync_direct(&src, &dest, "db", chrono_tz::UTC, &SyncOptions::default(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Source(_)));
        assert!(!*dest.queried.lock().unwrap());
    }
}
