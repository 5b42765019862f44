//! Snapshot success/failure classification.
//!
//! The listing tool reports unreadable subdirectories as inline text in its
//! normal output instead of a non-zero exit code or stderr, so a clean exit
//! is not enough: the start of stdout is also scanned for its error marker.

use crate::core::models::SnapshotResult;

/// Marker the listing tool prints inline when it cannot read a directory.
pub const ERROR_MARKER: &str = "[error opening dir]";

/// How many characters of stdout are scanned for the marker. The bound keeps
/// the scan from walking arbitrarily large listings; an error banner shows up
/// well within it. Kept at this value for compatibility with prior runs.
pub const MARKER_SCAN_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Clean,
    NonZeroExit(i32),
    StderrOutput,
    ErrorMarker,
}

impl Classification {
    pub fn is_failure(&self) -> bool {
        !matches!(self, Classification::Clean)
    }
}

/// Classifies a captured snapshot. Pure; does not touch the filesystem.
pub fn classify(snapshot: &SnapshotResult) -> Classification {
    if snapshot.exit_code != 0 {
        return Classification::NonZeroExit(snapshot.exit_code);
    }
    if !snapshot.stderr.is_empty() {
        return Classification::StderrOutput;
    }
    if prefix_window(&snapshot.stdout).contains(ERROR_MARKER) {
        return Classification::ErrorMarker;
    }
    Classification::Clean
}

/// First `MARKER_SCAN_CHARS` characters of `text`, respecting char boundaries.
fn prefix_window(text: &str) -> &str {
    match text.char_indices().nth(MARKER_SCAN_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
