//! GitHub API error types.

use thiserror::Error;

use crate::source::SourceError;

/// Errors that can occur when interacting with the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),
}

/// Whether an octocrab error is a credential rejection (401/403).
pub fn is_auth_error(e: &octocrab::Error) -> bool {
    match e {
        octocrab::Error::GitHub { source, .. } => {
            let status = source.status_code.as_u16();
            status == 401 || status == 403
        }
        _ => false,
    }
}

/// Whether the request failed before GitHub answered.
fn is_connection_error(e: &octocrab::Error) -> bool {
    matches!(
        e,
        octocrab::Error::Hyper { .. } | octocrab::Error::Service { .. }
    )
}

impl From<GitHubError> for SourceError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Api(e) if is_auth_error(&e) => SourceError::AuthRequired,
            GitHubError::Api(e) if is_connection_error(&e) => {
                SourceError::network(e.to_string())
            }
            GitHubError::Api(e) => SourceError::api(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use octocrab::Octocrab;

    use super::*;

    #[test]
    fn test_request_setup_failure_is_api_error() {
        let Err(err) = Octocrab::builder().base_uri("not a uri") else {
            panic!("expected an invalid base uri");
        };
        let err = SourceError::from(GitHubError::Api(err));
        assert!(matches!(err, SourceError::Api { .. }));
        assert!(err.to_string().contains("GitHub API error"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = Octocrab::builder()
            .base_uri("http://127.0.0.1:1")
            .unwrap()
            .build()
            .unwrap();
        let err = client
            .get::<serde_json::Value, _, ()>("/user/repos", None)
            .await
            .unwrap_err();
        let err = SourceError::from(GitHubError::Api(err));
        assert!(matches!(err, SourceError::Network { .. }), "{err:?}");
    }
}
