use asset_dashboard::settings::{Settings, BASE_URL_ENV};
use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn missing_file_yields_defaults() {
    std::env::remove_var(BASE_URL_ENV);
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.base_url, "http://127.0.0.1:5000");
    assert_eq!(settings.stats_interval_secs, 30);
    assert_eq!(settings.activities_interval_secs, 60);
    assert_eq!(settings.notifications_interval_secs, 60);
    assert!(settings.enable_toasts);
    assert_eq!(settings.toast_log.as_deref(), Some("toast.log"));
}

#[test]
#[serial]
fn partial_file_fills_in_defaults() {
    std::env::remove_var(BASE_URL_ENV);
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"base_url": "http://assets.local", "toast_duration": 2.5, "toast_log": null}"#,
    )
    .unwrap();
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings.base_url, "http://assets.local");
    assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    assert_eq!(settings.toast_log, None);

    let cfg = settings.notification_config();
    assert_eq!(cfg.toast_duration, Duration::from_millis(2_500));
    assert_eq!(cfg.toast_log, None);
}

#[test]
#[serial]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}

#[test]
#[serial]
fn env_overrides_base_url() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"base_url": "http://from-file"}"#).unwrap();

    std::env::set_var(BASE_URL_ENV, "http://from-env:8080");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    std::env::remove_var(BASE_URL_ENV);

    assert_eq!(settings.base_url, "http://from-env:8080");
}

#[test]
#[serial]
fn save_then_load_keeps_values() {
    std::env::remove_var(BASE_URL_ENV);
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        stats_interval_secs: 15,
        enable_toasts: false,
        log_file: Some("dash.log".into()),
        window_size: Some((1024, 768)),
        ..Settings::default()
    };
    settings.save(path.to_str().unwrap()).unwrap();

    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.stats_interval_secs, 15);
    assert!(!loaded.enable_toasts);
    assert_eq!(loaded.log_file.as_deref(), Some("dash.log"));
    assert_eq!(loaded.window_size, Some((1024, 768)));
}

#[test]
fn zero_intervals_are_clamped() {
    let settings = Settings {
        stats_interval_secs: 0,
        notifications_interval_secs: 0,
        toast_duration: f32::NAN,
        ..Settings::default()
    };
    assert_eq!(settings.stat_poller_config().stats_interval, Duration::from_secs(1));
    let cfg = settings.notification_config();
    assert_eq!(cfg.check_interval, Duration::from_secs(1));
    assert!(cfg.toast_duration <= Duration::from_secs(3600));
    assert_eq!(
        Settings::default().notification_config().toast_log,
        Some(PathBuf::from("toast.log"))
    );
}
