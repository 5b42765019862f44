mod simulated;
mod tree;

pub use simulated::SimulatedEngine;
pub use tree::TreeEngine;

use crate::core::models::SnapshotResult;
use anyhow::Result;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

/// Produces a recursive listing of a directory.
///
/// An `Err` means the listing could not run at all (e.g. the tool is not
/// installed); a completed-but-failed listing comes back as a normal
/// `SnapshotResult` and is judged by `classify`.
pub trait ListingEngine: Send + Sync {
    fn snapshot(
        &self,
        path: &Path,
    ) -> Pin<Box<dyn Future<Output = Result<SnapshotResult>> + Send>>;
}
