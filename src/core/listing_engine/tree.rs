use crate::core::listing_engine::ListingEngine;
use crate::core::models::SnapshotResult;
use anyhow::{Context, Result};
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use tokio::process::Command;

/// Runs the external `tree` command against a directory.
pub struct TreeEngine {
    command: String,
}

impl TreeEngine {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for TreeEngine {
    fn default() -> Self {
        Self::new("tree")
    }
}

impl ListingEngine for TreeEngine {
    fn snapshot(
        &self,
        path: &Path,
    ) -> Pin<Box<dyn Future<Output = Result<SnapshotResult>> + Send>> {
        let command = self.command.clone();
        let path = path.to_path_buf();

        Box::pin(async move {
            tracing::debug!("Running {} {}", command, path.display());

            // No timeout: a hung filesystem blocks the run. Accepted
            // limitation for a tool that walks local disks.
            let output = Command::new(&command)
                .arg(&path)
                .output()
                .await
                .with_context(|| format!("Failed to run {} {}", command, path.display()))?;

            Ok(SnapshotResult {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        })
    }
}
