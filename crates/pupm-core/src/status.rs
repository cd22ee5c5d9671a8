use std::path::Path;
use std::time::Duration;

use pupm_constants::{GIT_STATUS_RETRIES, GIT_STATUS_RETRY_DELAY_MS, MANIFEST_FILENAME};
use pupm_error::Result;
use pupm_exec::{execute, ExecutionError};
use pupm_logger;
use pupm_utils::retry;

pub struct StatusManager;

impl StatusManager {
    /// Reports uncommitted changes in the repository holding the Puppetfile.
    pub fn repo_status(&self, repo_dir: &str, debug: bool) -> Result<()> {
        let repo = Path::new(repo_dir);
        let (_, stdout, _) = retry(
            GIT_STATUS_RETRIES,
            Duration::from_millis(GIT_STATUS_RETRY_DELAY_MS),
            || execute("git status --porcelain", Some(repo), true, debug),
            is_transient_git_failure,
        )?;

        let listing = String::from_utf8_lossy(&stdout);
        let changes: Vec<&str> = listing
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();

        if changes.is_empty() {
            pupm_logger::success("Working tree clean.");
            return Ok(());
        }

        pupm_logger::warn(&format!("{} path(s) with local changes:", changes.len()));
        for line in &changes {
            println!("  {line}");
        }
        if changes.iter().any(|line| is_manifest_change(line)) {
            pupm_logger::warn("Puppetfile has uncommitted changes.");
        }
        Ok(())
    }
}

// A concurrent git process holds .git/index.lock briefly; only that
// failure is worth retrying.
fn is_transient_git_failure(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ExecutionError>()
        .is_some_and(|failure| String::from_utf8_lossy(&failure.stderr).contains("index.lock"))
}

// Porcelain lines are `XY path`: two status characters, one separator,
// then the path relative to the repository root. Only an exact path
// match is the manifest; `MyPuppetfile` or `sub/Puppetfile` are not.
fn is_manifest_change(line: &str) -> bool {
    line.get(3..) == Some(MANIFEST_FILENAME)
}
