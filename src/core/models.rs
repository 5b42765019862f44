use anyhow::bail;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::str::FromStr;

/// A directory to back up and the label used to name its remote object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupTarget {
    pub source_path: PathBuf,
    pub label: String,
}

impl FromStr for BackupTarget {
    type Err = anyhow::Error;

    /// Parses a `PATH=LABEL` command-line override.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((path, label)) = s.split_once('=') else {
            bail!("expected PATH=LABEL, got {s:?}");
        };
        if path.is_empty() || label.is_empty() {
            bail!("expected PATH=LABEL, got {s:?}");
        }
        Ok(Self {
            source_path: PathBuf::from(path),
            label: label.to_string(),
        })
    }
}

/// Captured output of one listing-command invocation.
#[derive(Debug, Clone)]
pub struct SnapshotResult {
    /// Exit code of the listing command, -1 if it was killed by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Remote object name for a target's tree listing.
///
/// Runs on the same calendar date overwrite the same object; runs on
/// different dates produce distinct objects.
pub fn remote_tree_path(label: &str, date: NaiveDate) -> String {
    format!("trees/{label}_{date}.tree.txt")
}

/// Terminal state of one target after a run.
#[derive(Debug, Clone)]
pub enum TargetOutcome {
    Done {
        label: String,
        remote_path: String,
        bytes: usize,
    },
    SnapshotFailed {
        label: String,
        exit_code: i32,
        stderr: String,
        stdout: String,
    },
    UploadFailed {
        label: String,
        detail: String,
    },
}

impl TargetOutcome {
    pub fn is_error(&self) -> bool {
        !matches!(self, TargetOutcome::Done { .. })
    }

    pub fn label(&self) -> &str {
        match self {
            TargetOutcome::Done { label, .. }
            | TargetOutcome::SnapshotFailed { label, .. }
            | TargetOutcome::UploadFailed { label, .. } => label,
        }
    }

    fn render_line(&self) -> String {
        match self {
            TargetOutcome::Done {
                label,
                remote_path,
                bytes,
            } => format!("OK {label}: uploaded {remote_path} ({bytes} bytes)"),
            TargetOutcome::SnapshotFailed {
                label,
                exit_code,
                stderr,
                stdout,
            } => {
                let mut line =
                    format!("ERROR {label}: directory listing failed (exit code {exit_code})");
                if !stderr.is_empty() {
                    line.push_str(&format!("; stderr: {}", stderr.trim_end()));
                }
                if !stdout.is_empty() {
                    line.push_str(&format!("; output: {}", stdout.trim_end()));
                }
                line
            }
            TargetOutcome::UploadFailed { label, detail } => {
                format!("ERROR {label}: upload failed: {detail}")
            }
        }
    }
}

/// Ordered per-target outcomes for one run.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<TargetOutcome>,
}

impl RunReport {
    pub fn record(&mut self, outcome: TargetOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[TargetOutcome] {
        &self.outcomes
    }

    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(|o| o.is_error())
    }

    /// One line per target, in processing order.
    pub fn render(&self) -> String {
        self.outcomes
            .iter()
            .map(|o| o.render_line())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
