//! The mapped repository record written to the destination.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Workflow status as understood by the destination database.
///
/// The destination stores these as Japanese option labels; see
/// [`Status::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// 未着手
    NotStarted,
    /// 進行中
    InProgress,
    /// 完了
    Done,
}

impl Status {
    /// The option name used by the destination's status property.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::NotStarted => "未着手",
            Status::InProgress => "進行中",
            Status::Done => "完了",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Repository visibility as understood by the destination database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Privacy {
    Public,
    Private,
    Archived,
}

impl Privacy {
    /// The option name used by the destination's select property.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Privacy::Public => "Public",
            Privacy::Private => "Private",
            Privacy::Archived => "Archived",
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A repository's metadata, mapped and ready to be written to the destination.
///
/// Built fresh on every run from the current source state. `name` is the
/// match key against the destination and is never empty; use
/// [`RepositoryRecord::new`] to enforce that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    /// Repository name, the unique match key.
    pub name: String,
    /// Description, already truncated to the destination limit.
    pub description: String,
    /// Web URL of the repository.
    pub url: Option<String>,
    /// Workflow status.
    pub status: Status,
    /// Last-updated timestamp as an ISO-8601 string in the configured zone.
    /// `None` means the date property is omitted from the write.
    pub updated_at: Option<String>,
    /// Owner login.
    pub owner: Option<String>,
    /// Language and technology tags.
    pub tech_stack: Vec<String>,
    /// Visibility.
    pub privacy: Privacy,
    /// Free-form tags.
    pub tags: Vec<String>,
}

impl RepositoryRecord {
    /// Create a record with the given name and default values for everything else.
    ///
    /// Returns `None` when the name is empty or whitespace-only. The name is
    /// trimmed.
    #[must_use]
    pub fn new(name: &str, status: Status, privacy: Privacy) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            description: String::new(),
            url: None,
            status,
            updated_at: None,
            owner: None,
            tech_stack: Vec::new(),
            privacy,
            tags: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::NotStarted.label(), "未着手");
        assert_eq!(Status::InProgress.label(), "進行中");
        assert_eq!(Status::Done.label(), "完了");
        assert_eq!(Status::Done.to_string(), "完了");
    }

    #[test]
    fn test_privacy_labels() {
        assert_eq!(Privacy::Public.label(), "Public");
        assert_eq!(Privacy::Private.label(), "Private");
        assert_eq!(Privacy::Archived.to_string(), "Archived");
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert!(RepositoryRecord::new("", Status::Done, Privacy::Public).is_none());
        assert!(RepositoryRecord::new("   ", Status::Done, Privacy::Public).is_none());
    }

    #[test]
    fn test_new_trims_name_and_sets_defaults() {
        let record = RepositoryRecord::new("  repo-a ", Status::InProgress, Privacy::Private)
            .expect("valid name");
        assert_eq!(record.name, "repo-a");
        assert_eq!(record.description, "");
        assert!(record.url.is_none());
        assert!(record.updated_at.is_none());
        assert!(record.tech_stack.is_empty());
        assert!(record.tags.is_empty());
        assert_eq!(record.status, Status::InProgress);
        assert_eq!(record.privacy, Privacy::Private);
    }
}
