#![cfg(unix)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use treebak::core::{ListingEngine, TreeEngine};

/// Writes an executable stand-in for the listing tool.
fn fake_tool(dir: &Path, script: &str) -> std::path::PathBuf {
    let path = dir.join("fake-tree");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(script.as_bytes()).unwrap();
    let mut perms = file.metadata().unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[tokio::test]
async fn captures_stdout_and_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let tool = fake_tool(dir.path(), "#!/bin/sh\necho \"$1\"\necho 'x.txt'\n");

    let engine = TreeEngine::new(tool.to_str().unwrap());
    let snapshot = engine.snapshot(Path::new("/data/repos")).await.unwrap();

    assert_eq!(snapshot.exit_code, 0);
    assert_eq!(snapshot.stdout, "/data/repos\nx.txt\n");
    assert!(snapshot.stderr.is_empty());
}

#[tokio::test]
async fn captures_stderr_and_nonzero_exit_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let tool = fake_tool(
        dir.path(),
        "#!/bin/sh\necho 'partial' \necho 'cannot read' >&2\nexit 2\n",
    );

    let engine = TreeEngine::new(tool.to_str().unwrap());
    let snapshot = engine.snapshot(Path::new("/data/x")).await.unwrap();

    assert_eq!(snapshot.exit_code, 2);
    assert_eq!(snapshot.stdout, "partial\n");
    assert_eq!(snapshot.stderr, "cannot read\n");
}

#[tokio::test]
async fn missing_tool_is_an_error() {
    let engine = TreeEngine::new("/nonexistent/fake-tree");
    assert!(engine.snapshot(Path::new("/data/x")).await.is_err());
}
