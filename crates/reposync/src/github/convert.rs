//! Model conversion from GitHub API types to source repositories.

use std::collections::HashMap;

use octocrab::models::Repository as GitHubRepo;

use crate::source::{LanguageHistogram, SourceRepo};

/// Order a raw `/languages` response by size, largest first.
///
/// Ties are broken by name so the order is stable.
pub fn sort_histogram(raw: HashMap<String, u64>) -> LanguageHistogram {
    let mut histogram: LanguageHistogram = raw.into_iter().collect();
    histogram.sort_by(|(a_name, a_bytes), (b_name, b_bytes)| {
        b_bytes.cmp(a_bytes).then_with(|| a_name.cmp(b_name))
    });
    histogram
}

/// Convert a GitHub repository to a platform-agnostic [`SourceRepo`].
///
/// The language histogram is filled in separately, since it needs one extra
/// request per repository.
pub fn to_source_repo(repo: &GitHubRepo) -> SourceRepo {
    let owner = repo
        .owner
        .as_ref()
        .map(|o| o.login.clone())
        .unwrap_or_default();

    let language = repo
        .language
        .as_ref()
        .and_then(|v| v.as_str().map(String::from));

    SourceRepo {
        name: repo.name.clone(),
        owner,
        description: repo.description.clone(),
        html_url: repo.html_url.as_ref().map(|u| u.to_string()),
        is_archived: repo.archived.unwrap_or(false),
        is_private: repo.private.unwrap_or(false),
        language,
        languages: None,
        pushed_at: repo.pushed_at,
        updated_at: repo.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an octocrab repository from a minimal API payload.
    fn mock_repo(name: &str, extra: serde_json::Value) -> GitHubRepo {
        let mut json = serde_json::json!({
            "id": 12345,
            "node_id": "MDEwOlJlcG9zaXRvcnkxMjM0NQ==",
            "name": name,
            "full_name": format!("octocat/{}", name),
            "owner": {
                "login": "octocat",
                "id": 1,
                "node_id": "MDQ6VXNlcjE=",
                "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
                "gravatar_id": "",
                "url": "https://api.github.com/users/octocat",
                "html_url": "https://github.com/octocat",
                "followers_url": "https://api.github.com/users/octocat/followers",
                "following_url": "https://api.github.com/users/octocat/following{/other_user}",
                "gists_url": "https://api.github.com/users/octocat/gists{/gist_id}",
                "starred_url": "https://api.github.com/users/octocat/starred{/owner}{/repo}",
                "subscriptions_url": "https://api.github.com/users/octocat/subscriptions",
                "organizations_url": "https://api.github.com/users/octocat/orgs",
                "repos_url": "https://api.github.com/users/octocat/repos",
                "events_url": "https://api.github.com/users/octocat/events{/privacy}",
                "received_events_url": "https://api.github.com/users/octocat/received_events",
                "type": "User",
                "site_admin": false
            },
            "html_url": format!("https://github.com/octocat/{}", name),
            "url": format!("https://api.github.com/repos/octocat/{}", name),
            "created_at": "2020-01-01T00:00:00Z"
        });
        if let (Some(base), Some(extra)) = (json.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(json).expect("valid repository payload")
    }

    #[test]
    fn test_to_source_repo_basic_fields() {
        let repo = mock_repo(
            "repo-a",
            serde_json::json!({
                "description": "A test repo",
                "private": true,
                "archived": false,
                "language": "Rust",
                "pushed_at": "2024-03-01T15:30:00Z",
                "updated_at": "2024-03-02T00:00:00Z"
            }),
        );

        let source = to_source_repo(&repo);
        assert_eq!(source.name, "repo-a");
        assert_eq!(source.owner, "octocat");
        assert_eq!(source.description.as_deref(), Some("A test repo"));
        assert_eq!(
            source.html_url.as_deref(),
            Some("https://github.com/octocat/repo-a")
        );
        assert!(source.is_private);
        assert!(!source.is_archived);
        assert_eq!(source.language.as_deref(), Some("Rust"));
        assert!(source.languages.is_none());
        assert!(source.pushed_at.is_some());
        assert!(source.updated_at.is_some());
    }

    #[test]
    fn test_to_source_repo_missing_optional_fields() {
        let repo = mock_repo("bare", serde_json::json!({}));
        let source = to_source_repo(&repo);
        assert!(!source.is_private);
        assert!(!source.is_archived);
        assert!(source.description.is_none());
        assert!(source.language.is_none());
        assert!(source.pushed_at.is_none());
    }

    #[test]
    fn test_sort_histogram_orders_by_size() {
        let raw = HashMap::from([
            ("Nix".to_string(), 20),
            ("Rust".to_string(), 1000),
            ("Shell".to_string(), 20),
        ]);
        let sorted = sort_histogram(raw);
        let names: Vec<&str> = sorted.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Nix", "Shell"]);
    }
}
