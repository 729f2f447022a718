use reposync::github::GitHubClient;
use reposync::sync::export_repositories;

use crate::commands::shared::{overrides, reporter};
use crate::config::Config;
use crate::{FileOptions, ZoneOptions};

pub(crate) async fn handle_export(
    config: &Config,
    file: FileOptions,
    zone: ZoneOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config.settings(overrides(Some(file), zone))?;
    let client = GitHubClient::new(settings.require_github_token()?)?;

    let (reporter, callback) = reporter();
    let result = export_repositories(
        &client,
        &settings.tabular_path,
        settings.time_zone,
        Some(&callback),
    )
    .await;
    reporter.finish();

    result?;
    Ok(())
}
