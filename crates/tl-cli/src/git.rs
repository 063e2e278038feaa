//! Git synchronization of the data directory.
//!
//! Shells out to the external `git` binary. Failures are logged and never
//! abort the run: the record state machine does not depend on sync, and the
//! day file on disk is already in its final state when we push.

use std::path::Path;
use std::process::Command;

const COMMIT_MESSAGE: &str = "Autoupdate triggered by tl";

/// Pulls the latest changes into the data directory.
pub fn pull(data_dir: &Path) {
    git(data_dir, &["pull"]);
}

/// Stages, commits, and pushes the day files.
pub fn commit_and_push(data_dir: &Path) {
    git(data_dir, &["add", "."]);
    git(data_dir, &["commit", "-m", COMMIT_MESSAGE]);
    git(data_dir, &["push"]);
}

fn git(data_dir: &Path, args: &[&str]) {
    let rendered = format!("git {}", args.join(" "));

    match Command::new("git")
        .args(args)
        .current_dir(data_dir)
        .output()
    {
        Ok(output) => {
            for line in String::from_utf8_lossy(&output.stdout).lines() {
                tracing::debug!("{rendered}: {line}");
            }
            for line in String::from_utf8_lossy(&output.stderr).lines() {
                tracing::warn!("{rendered}: {line}");
            }
            if !output.status.success() {
                tracing::warn!("{rendered} exited with {}", output.status);
            }
        }
        Err(err) => tracing::warn!("failed to run {rendered}: {err}"),
    }
}
