pub mod classify;
pub mod listing_engine;
pub mod models;
pub mod notifications;
pub mod orchestrator;
pub mod uploader;

pub use classify::{Classification, classify};
pub use listing_engine::{ListingEngine, SimulatedEngine, TreeEngine};
pub use models::{BackupTarget, RunReport, SnapshotResult, TargetOutcome, remote_tree_path};
pub use orchestrator::Orchestrator;
pub use uploader::{DiskClient, UploadError};
