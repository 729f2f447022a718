//! Tabular (CSV) intermediate between the exporter and the importer.
//!
//! The file uses a fixed Japanese header set, one repository per row. Empty
//! cells read back as absent values.

mod reader;
mod writer;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::source::SourceRepo;

pub use reader::{read_rows, read_rows_from};
pub use writer::{write_rows, write_rows_to};

/// Default file name used by the exporter and the importer.
pub const DEFAULT_PATH: &str = "github_repositories.csv";

/// Column headers, in file order.
pub const HEADERS: [&str; 9] = [
    "リポジトリ名",
    "説明",
    "URL",
    "ステータス",
    "更新日",
    "オーナー/担当者",
    "技術スタック",
    "プライバシー設定",
    "タグ",
];

/// Errors from reading or writing the tabular file.
#[derive(Debug, Error)]
pub enum TabularError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One raw row of the tabular file.
///
/// Every cell is optional; interpretation happens in the field mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabularRow {
    #[serde(rename = "リポジトリ名")]
    pub name: Option<String>,
    #[serde(rename = "説明")]
    pub description: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(rename = "ステータス")]
    pub status: Option<String>,
    #[serde(rename = "更新日")]
    pub updated_at: Option<String>,
    #[serde(rename = "オーナー/担当者")]
    pub owner: Option<String>,
    #[serde(rename = "技術スタック")]
    pub tech_stack: Option<String>,
    #[serde(rename = "プライバシー設定")]
    pub privacy: Option<String>,
    #[serde(rename = "タグ")]
    pub tags: Option<String>,
}

/// Status label written for a repository in the export vocabulary.
fn export_status(repo: &SourceRepo) -> &'static str {
    if repo.is_archived {
        "アーカイブ"
    } else if repo.pushed_at.is_some() {
        "メンテナンス中"
    } else {
        "開発中"
    }
}

/// Build an export row for a repository.
///
/// The date column holds the last-push date in `zone`; the tech stack column
/// holds the language histogram keys (falling back to the primary language)
/// joined by `", "`. Tags are always empty.
#[must_use]
pub fn row_from_source(repo: &SourceRepo, zone: Tz) -> TabularRow {
    let tech_stack = match &repo.languages {
        Some(histogram) => histogram
            .iter()
            .map(|(lang, _)| lang.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        None => repo.language.clone().unwrap_or_default(),
    };
    let privacy = if repo.is_private {
        "プライベート"
    } else {
        "公開"
    };

    TabularRow {
        name: Some(repo.name.clone()),
        description: Some(repo.description.clone().unwrap_or_default()),
        url: repo.html_url.clone(),
        status: Some(export_status(repo).to_string()),
        updated_at: repo
            .pushed_at
            .map(|t| t.with_timezone(&zone).format("%Y-%m-%d").to_string()),
        owner: Some(repo.owner.clone()),
        tech_stack: Some(tech_stack),
        privacy: Some(privacy.to_string()),
        tags: Some(String::new()),
    }
}
