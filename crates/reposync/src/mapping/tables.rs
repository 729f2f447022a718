//! Fixed lookup tables for enumerated destination fields.
//!
//! Each origin gets its own named table. The tabular origin speaks the
//! vocabulary of the exported spreadsheet; the direct origin only knows
//! whether a repository is active or archived. Their defaults differ and must
//! stay that way.

use crate::record::{Privacy, Status};

/// A string-to-value table with a fallback for unrecognized input.
#[derive(Debug)]
pub struct LookupTable<T: 'static> {
    /// Human-readable table name, used in logs.
    pub name: &'static str,
    /// Recognized source labels.
    pub entries: &'static [(&'static str, T)],
    /// Value used for missing or unrecognized labels.
    pub default: T,
}

impl<T: Copy + 'static> LookupTable<T> {
    /// Look up a label, falling back to the table default.
    ///
    /// Labels are matched exactly after trimming surrounding whitespace.
    #[must_use]
    pub fn resolve(&self, raw: Option<&str>) -> T {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return self.default;
        };
        match self.entries.iter().find(|(label, _)| *label == raw) {
            Some((_, value)) => *value,
            None => {
                tracing::debug!(
                    table = self.name,
                    label = raw,
                    "Unrecognized label, using default"
                );
                self.default
            }
        }
    }
}

pub type StatusTable = LookupTable<Status>;
pub type PrivacyTable = LookupTable<Privacy>;

/// Status labels found in exported spreadsheets.
pub static TABULAR_STATUS: StatusTable = LookupTable {
    name: "tabular-status",
    entries: &[
        ("メンテナンス中", Status::InProgress),
        ("完了", Status::Done),
        ("未着手", Status::NotStarted),
        ("開発中", Status::InProgress),
        ("アーカイブ", Status::Done),
    ],
    default: Status::NotStarted,
};

/// Status labels derived from the source platform's archived flag.
pub static DIRECT_STATUS: StatusTable = LookupTable {
    name: "direct-status",
    entries: &[("Active", Status::InProgress), ("Archived", Status::Done)],
    default: Status::InProgress,
};

/// Privacy labels found in exported spreadsheets.
pub static TABULAR_PRIVACY: PrivacyTable = LookupTable {
    name: "tabular-privacy",
    entries: &[
        ("公開", Privacy::Public),
        ("非公開", Privacy::Private),
        ("プライベート", Privacy::Private),
        ("アーカイブ", Privacy::Archived),
    ],
    default: Privacy::Private,
};

/// Privacy labels derived from the source platform's private flag.
pub static DIRECT_PRIVACY: PrivacyTable = LookupTable {
    name: "direct-privacy",
    entries: &[("public", Privacy::Public), ("private", Privacy::Private)],
    default: Privacy::Private,
};

/// Source label for the direct status table.
#[must_use]
pub fn direct_status_label(archived: bool) -> &'static str {
    if archived { "Archived" } else { "Active" }
}

/// Source label for the direct privacy table.
#[must_use]
pub fn direct_privacy_label(private: bool) -> &'static str {
    if private { "private" } else { "public" }
}
