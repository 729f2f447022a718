use reposync::github::GitHubClient;
use reposync::notion::NotionClient;
use reposync::sync::{SyncOptions, sync_direct};

use crate::ZoneOptions;
use crate::commands::shared::{overrides, reporter};
use crate::config::Config;

pub(crate) async fn handle_sync(
    config: &Config,
    zone: ZoneOptions,
    dry_run: bool,
    languages: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config.settings(overrides(None, zone))?;

    // Every credential is checked before the first request
    let github_token = settings.require_github_token()?;
    let notion_token = settings.require_notion_token()?;
    let database_id = settings.require_notion_database_id()?;

    let github = GitHubClient::new(github_token)?;
    let notion = NotionClient::new(notion_token)?;

    let options = SyncOptions {
        dry_run,
        include_languages: languages,
    };

    let (reporter, callback) = reporter();
    let result = sync_direct(
        &github,
        &notion,
        database_id,
        settings.time_zone,
        &options,
        Some(&callback),
    )
    .await;
    reporter.finish();

    result?;
    Ok(())
}
