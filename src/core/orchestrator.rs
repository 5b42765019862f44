use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{error, info};

use crate::core::classify::classify;
use crate::core::listing_engine::ListingEngine;
use crate::core::models::{BackupTarget, RunReport, TargetOutcome, remote_tree_path};
use crate::core::uploader::DiskClient;

/// Sequences snapshot, classification, and upload for a batch of targets.
///
/// Targets are independent: one target's failure is recorded and the batch
/// moves on.
pub struct Orchestrator {
    engine: Arc<dyn ListingEngine>,
    uploader: DiskClient,
}

impl Orchestrator {
    pub fn new(engine: Arc<dyn ListingEngine>, uploader: DiskClient) -> Self {
        Self { engine, uploader }
    }

    pub async fn run(&self, targets: &[BackupTarget]) -> RunReport {
        let today = Local::now().date_naive();
        let mut report = RunReport::default();

        for target in targets {
            let outcome = self.process_target(target, today).await;
            match &outcome {
                TargetOutcome::Done { label, remote_path, .. } => {
                    info!("Backed up {} to {}", label, remote_path);
                }
                TargetOutcome::SnapshotFailed { label, exit_code, .. } => {
                    error!("Listing failed for {} (exit code {})", label, exit_code);
                }
                TargetOutcome::UploadFailed { label, detail } => {
                    error!("Upload failed for {}: {}", label, detail);
                }
            }
            report.record(outcome);
        }

        report
    }

    async fn process_target(&self, target: &BackupTarget, date: NaiveDate) -> TargetOutcome {
        info!("Backing up {}", target.source_path.display());

        let snapshot = match self.engine.snapshot(&target.source_path).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                return TargetOutcome::SnapshotFailed {
                    label: target.label.clone(),
                    exit_code: -1,
                    stderr: format!("{e:#}"),
                    stdout: String::new(),
                };
            }
        };

        let classification = classify(&snapshot);
        if classification.is_failure() {
            tracing::debug!("Snapshot of {} classified as {:?}", target.label, classification);
            return TargetOutcome::SnapshotFailed {
                label: target.label.clone(),
                exit_code: snapshot.exit_code,
                stderr: snapshot.stderr,
                stdout: snapshot.stdout,
            };
        }

        let remote_path = remote_tree_path(&target.label, date);
        let payload = snapshot.stdout.into_bytes();
        let bytes = payload.len();

        match self.uploader.upload(payload, &remote_path).await {
            Ok(()) => TargetOutcome::Done {
                label: target.label.clone(),
                remote_path,
                bytes,
            },
            Err(e) => TargetOutcome::UploadFailed {
                label: target.label.clone(),
                detail: e.to_string(),
            },
        }
    }
}
