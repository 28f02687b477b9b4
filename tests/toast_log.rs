use asset_dashboard::api::NotificationCategory;
use asset_dashboard::notifications::{ToastStack, DEFAULT_TOAST_DURATION};
use asset_dashboard::toast_log::append_toast_log;
use std::time::Instant;
use tempfile::tempdir;

#[test]
fn append_creates_file_and_keeps_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("toast.log");
    append_toast_log(&path, "first");
    append_toast_log(&path, "second");

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" - first"));
    assert!(lines[1].ends_with(" - second"));
}

#[test]
fn append_to_missing_directory_does_not_panic() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("toast.log");
    assert!(std::panic::catch_unwind(|| append_toast_log(&path, "lost")).is_ok());
    assert!(!path.exists());
}

#[test]
fn toast_stack_records_pushed_toasts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("toast.log");
    let mut stack = ToastStack::with_log(Some(path.clone()));
    stack.push(
        "Done",
        "All notifications marked as read",
        NotificationCategory::Success,
        DEFAULT_TOAST_DURATION,
        Instant::now(),
    );

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Done: All notifications marked as read"));
}

#[test]
fn toast_stack_without_log_writes_nothing() {
    let dir = tempdir().unwrap();
    let mut stack = ToastStack::with_log(None);
    stack.push("a", "b", NotificationCategory::Info, DEFAULT_TOAST_DURATION, Instant::now());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
