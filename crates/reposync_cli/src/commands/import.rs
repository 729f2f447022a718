use reposync::notion::NotionClient;
use reposync::sync::{SyncOptions, import_tabular};

use crate::commands::shared::{overrides, reporter};
use crate::config::Config;
use crate::{FileOptions, ZoneOptions};

pub(crate) async fn handle_import(
    config: &Config,
    file: FileOptions,
    zone: ZoneOptions,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config.settings(overrides(Some(file), zone))?;
    let token = settings.require_notion_token()?;
    let database_id = settings.require_notion_database_id()?;
    let client = NotionClient::new(token)?;

    let options = SyncOptions {
        dry_run,
        ..SyncOptions::default()
    };

    let (reporter, callback) = reporter();
    let result = import_tabular(
        &client,
        database_id,
        &settings.tabular_path,
        settings.time_zone,
        &options,
        Some(&callback),
    )
    .await;
    reporter.finish();

    result?;
    Ok(())
}
