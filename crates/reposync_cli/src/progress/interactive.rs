use std::sync::Mutex;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use reposync::sync::SyncProgress;

/// How a printed line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Success,
    Warning,
    Failure,
}

/// What the reporter does for an event.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    /// Start (or retitle) the spinner.
    Spin(String),
    /// Update the running spinner's message.
    Message(String),
    /// Stop the spinner, then print a line.
    Finish(Tone, String),
    /// Print a line above the spinner.
    Line(Tone, String),
    Nothing,
}

fn action_for(event: SyncProgress) -> Action {
    match event {
        SyncProgress::FetchingRepos { source } => {
            Action::Spin(format!("Fetching repositories from {}...", source))
        }
        SyncProgress::FetchedPage {
            page, total_so_far, ..
        } => Action::Message(format!(
            "Fetched {} repositories (page {})",
            total_so_far, page
        )),
        SyncProgress::FetchingLanguages { total } => {
            Action::Message(format!("Fetching languages for {} repositories...", total))
        }
        SyncProgress::FetchComplete { total } => {
            Action::Finish(Tone::Plain, format!("Found {} repositories", total))
        }
        SyncProgress::LoadedRows { path, rows } => {
            Action::Line(Tone::Plain, format!("Read {} rows from {}", rows, path))
        }
        SyncProgress::Exported { path, rows } => Action::Line(
            Tone::Success,
            format!(
                "Repository data has been saved to {} ({} repositories)",
                path, rows
            ),
        ),
        SyncProgress::QueryingDestination => Action::Spin("Querying Notion database...".into()),
        SyncProgress::IndexBuilt { indexed, untitled } => {
            let mut line = format!("Found {} existing pages", indexed);
            if untitled > 0 {
                line.push_str(&format!(" ({} untitled, ignored)", untitled));
            }
            Action::Finish(Tone::Plain, line)
        }
        SyncProgress::Skipped { position, reason } => {
            Action::Line(Tone::Warning, format!("Skipped row {}: {}", position, reason))
        }
        SyncProgress::DuplicateName { name } => Action::Line(
            Tone::Warning,
            format!("⚠ {} appears more than once; each occurrence is written", name),
        ),
        SyncProgress::Created { name, dry_run } => {
            let verb = if dry_run { "Would create" } else { "Created" };
            Action::Line(Tone::Success, format!("{}: {}", verb, name))
        }
        SyncProgress::Updated { name, dry_run, .. } => {
            let verb = if dry_run { "Would update" } else { "Updated" };
            Action::Line(Tone::Success, format!("{}: {}", verb, name))
        }
        SyncProgress::UpsertError { name, error } => {
            Action::Line(Tone::Failure, format!("Error processing {}: {}", name, error))
        }
        SyncProgress::SyncComplete {
            updated,
            created,
            failed,
            skipped,
        } => {
            let mut line = format!(
                "Sync completed. Updated: {}, Created: {}, Failed: {}",
                updated, created, failed
            );
            if skipped > 0 {
                line.push_str(&format!(", Skipped: {}", skipped));
            }
            let tone = if failed > 0 { Tone::Warning } else { Tone::Plain };
            Action::Finish(tone, line)
        }
        _ => Action::Nothing,
    }
}

fn paint(tone: Tone, line: &str) -> String {
    match tone {
        Tone::Plain => line.to_string(),
        Tone::Success => style(line).green().to_string(),
        Tone::Warning => style(line).yellow().to_string(),
        Tone::Failure => style(line).red().to_string(),
    }
}

/// Interactive progress reporter using indicatif.
///
/// Shows a single spinner while waiting on the network and prints one styled
/// line per record above it.
pub struct InteractiveReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl InteractiveReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    pub fn handle(&self, event: SyncProgress) {
        let mut spinner = self.spinner.lock().unwrap_or_else(|e| e.into_inner());

        match action_for(event) {
            Action::Spin(message) => {
                let bar = spinner.get_or_insert_with(Self::new_spinner);
                bar.set_message(message);
            }
            Action::Message(message) => {
                if let Some(bar) = spinner.as_ref() {
                    bar.set_message(message);
                }
            }
            Action::Finish(tone, line) => {
                if let Some(bar) = spinner.take() {
                    bar.finish_and_clear();
                }
                println!("{}", paint(tone, &line));
            }
            Action::Line(tone, line) => match spinner.as_ref() {
                Some(bar) => bar.println(paint(tone, &line)),
                None => println!("{}", paint(tone, &line)),
            },
            Action::Nothing => {}
        }
    }

    /// Clear the spinner if one is still running.
    pub fn finish(&self) {
        let mut spinner = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(bar) = spinner.take() {
            bar.finish_and_clear();
        }
    }

    fn new_spinner() -> ProgressBar {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
    }
}

impl Default for InteractiveReporter {
    fn default() -> Self {
        Self::new()
    }
}
