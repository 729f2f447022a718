//! Field mapping from raw source data into destination records.
//!
//! # Module Structure
//!
//! - [`tables`] - Origin-specific lookup tables for status and privacy
//! - [`fields`] - Total per-field transformations
//! - [`properties`] - Rendering of records into the destination property schema
//!
//! Records are built by the per-origin constructors here:
//! [`record_from_source`] for the direct path and [`record_from_row`] for the
//! tabular path.

pub mod fields;
pub mod properties;
pub mod tables;

use chrono_tz::Tz;

use crate::record::RepositoryRecord;
use crate::source::SourceRepo;
use crate::tabular::TabularRow;

pub use fields::{
    DESCRIPTION_LIMIT, map_multi_value_field, map_privacy, map_status, multi_value_from_keys,
    normalize_instant, normalize_timestamp, truncate_description,
};
pub use properties::{PropertyBag, page_properties, title_of};
pub use tables::{
    DIRECT_PRIVACY, DIRECT_STATUS, LookupTable, PrivacyTable, StatusTable, TABULAR_PRIVACY,
    TABULAR_STATUS,
};

/// Map a repository fetched directly from the source platform.
///
/// The tech stack comes from the language histogram when one was fetched,
/// otherwise from the primary language. Returns `None` for a blank name.
#[must_use]
pub fn record_from_source(repo: &SourceRepo, zone: Tz) -> Option<RepositoryRecord> {
    let status = map_status(
        &DIRECT_STATUS,
        Some(tables::direct_status_label(repo.is_archived)),
    );
    let privacy = map_privacy(
        &DIRECT_PRIVACY,
        Some(tables::direct_privacy_label(repo.is_private)),
    );

    let mut record = RepositoryRecord::new(&repo.name, status, privacy)?;
    record.description = truncate_description(repo.description.as_deref(), DESCRIPTION_LIMIT);
    record.url = repo.html_url.clone();
    record.updated_at = normalize_instant(repo.updated_at, zone);
    record.owner = Some(repo.owner.clone()).filter(|o| !o.is_empty());
    record.tech_stack = match &repo.languages {
        Some(histogram) => multi_value_from_keys(histogram.iter().map(|(lang, _)| lang)),
        None => map_multi_value_field(repo.language.as_deref()),
    };
    Some(record)
}

/// Map a row read from a tabular file. Returns `None` for a blank name.
#[must_use]
pub fn record_from_row(row: &TabularRow, zone: Tz) -> Option<RepositoryRecord> {
    let status = map_status(&TABULAR_STATUS, row.status.as_deref());
    let privacy = map_privacy(&TABULAR_PRIVACY, row.privacy.as_deref());

    let name = row.name.as_deref().unwrap_or_default();
    let mut record = RepositoryRecord::new(name, status, privacy)?;
    record.description = truncate_description(row.description.as_deref(), DESCRIPTION_LIMIT);
    record.url = row.url.clone();
    record.updated_at = normalize_timestamp(row.updated_at.as_deref(), zone);
    record.owner = row.owner.clone();
    record.tech_stack = map_multi_value_field(row.tech_stack.as_deref());
    record.tags = map_multi_value_field(row.tags.as_deref());
    Some(record)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::record::{Privacy, Status};

    fn tokyo() -> Tz {
        "Asia/Tokyo".parse().unwrap()
    }

    fn source_repo() -> SourceRepo {
        SourceRepo {
            name: "repo-a".to_string(),
            owner: "octocat".to_string(),
            description: Some("d".repeat(2100)),
            html_url: Some("https://github.com/octocat/repo-a".to_string()),
            is_archived: false,
            is_private: true,
            language: Some("Rust".to_string()),
            languages: None,
            pushed_at: None,
            updated_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_record_from_source() {
        let record = record_from_source(&source_repo(), tokyo()).unwrap();
        assert_eq!(record.name, "repo-a");
        assert_eq!(record.description.chars().count(), DESCRIPTION_LIMIT);
        assert_eq!(record.status, Status::InProgress);
        assert_eq!(record.privacy, Privacy::Private);
        assert_eq!(record.updated_at.as_deref(), Some("2024-01-01T09:00:00+09:00"));
        assert_eq!(record.owner.as_deref(), Some("octocat"));
        assert_eq!(record.tech_stack, vec!["Rust"]);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_record_from_source_archived_public() {
        let mut repo = source_repo();
        repo.is_archived = true;
        repo.is_private = false;
        repo.language = None;
        repo.updated_at = None;
        let record = record_from_source(&repo, tokyo()).unwrap();
        assert_eq!(record.status, Status::Done);
        assert_eq!(record.privacy, Privacy::Public);
        assert!(record.tech_stack.is_empty());
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn test_record_from_source_prefers_histogram() {
        let mut repo = source_repo();
        repo.languages = Some(vec![("Rust".to_string(), 1000), ("Nix".to_string(), 20)]);
        let record = record_from_source(&repo, tokyo()).unwrap();
        assert_eq!(record.tech_stack, vec!["Rust", "Nix"]);
    }

    #[test]
    fn test_record_from_source_blank_name() {
        let mut repo = source_repo();
        repo.name = " ".to_string();
        assert!(record_from_source(&repo, tokyo()).is_none());
    }

    #[test]
    fn test_record_from_row() {
        let row = TabularRow {
            name: Some("repo-b".to_string()),
            description: None,
            url: None,
            status: Some("アーカイブ".to_string()),
            updated_at: Some("2024-05-06".to_string()),
            owner: Some("octocat".to_string()),
            tech_stack: Some("Python, Go, , Rust ".to_string()),
            privacy: Some("公開".to_string()),
            tags: None,
        };
        let record = record_from_row(&row, tokyo()).unwrap();
        assert_eq!(record.name, "repo-b");
        assert_eq!(record.description, "");
        assert_eq!(record.status, Status::Done);
        assert_eq!(record.privacy, Privacy::Public);
        assert_eq!(record.updated_at.as_deref(), Some("2024-05-06"));
        assert_eq!(record.tech_stack, vec!["Python", "Go", "Rust"]);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_record_from_row_defaults() {
        let row = TabularRow {
            name: Some("repo-c".to_string()),
            ..TabularRow::default()
        };
        let record = record_from_row(&row, tokyo()).unwrap();
        assert_eq!(record.status, Status::NotStarted);
        assert_eq!(record.privacy, Privacy::Private);
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn test_record_from_row_missing_name() {
        assert!(record_from_row(&TabularRow::default(), tokyo()).is_none());
    }
}
