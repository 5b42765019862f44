use crate::core::listing_engine::ListingEngine;
use crate::core::models::SnapshotResult;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Mutex;

/// Listing engine that replays canned results, for tests.
#[derive(Default)]
pub struct SimulatedEngine {
    results: Mutex<HashMap<PathBuf, SnapshotResult>>,
    calls: Mutex<Vec<PathBuf>>,
}

impl SimulatedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_result(&self, path: impl Into<PathBuf>, result: SnapshotResult) {
        self.results.lock().unwrap().insert(path.into(), result);
    }

    /// Paths snapshotted so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl ListingEngine for SimulatedEngine {
    fn snapshot(
        &self,
        path: &Path,
    ) -> Pin<Box<dyn Future<Output = Result<SnapshotResult>> + Send>> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        let result = self.results.lock().unwrap().get(path).cloned();
        let path = path.to_path_buf();

        Box::pin(async move {
            result.ok_or_else(|| anyhow!("no simulated listing for {}", path.display()))
        })
    }
}
