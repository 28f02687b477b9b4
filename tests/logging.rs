use std::{fs, thread::sleep, time::Duration};

use asset_dashboard::logging::{build_filter, init};
use serial_test::serial;
use tempfile::tempdir;

// The global subscriber installs once per test binary, so file output and the
// repeated-init case share a single test.
#[test]
#[serial]
fn writes_log_file_and_ignores_later_init() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dashboard.log");

    init(true, Some(&path));
    tracing::info!("dashboard log test");

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("dashboard log test"));

    init(false, None);
    tracing::info!("after second init");

    sleep(Duration::from_millis(100));

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("after second init"));
}

#[test]
#[serial]
fn rust_log_ignored_unless_debug() {
    std::env::set_var("RUST_LOG", "trace");
    assert_eq!(build_filter(false).to_string(), "info");
    assert_eq!(build_filter(true).to_string(), "trace");
    std::env::remove_var("RUST_LOG");
    assert_eq!(build_filter(true).to_string(), "debug");
}
