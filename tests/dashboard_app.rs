
use asset_dashboard::api::{
    ApiReply, ApiRequest, DashboardStats, Notification, NotificationCategory, NotificationId,
};
use asset_dashboard::dashboard::StatKind;
use asset_dashboard::gui::DashboardApp;
use asset_dashboard::notifications::{ListState, NotificationIntent};
use asset_dashboard::settings::Settings;
use eframe::egui;
use mock_sink::MockSink;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

fn settings() -> Settings {
    Settings {
        toast_log: None,
        ..Settings::default()
    }
}

fn notification(id: i64) -> Notification {
    Notification {
        id: NotificationId::Number(id),
        category: NotificationCategory::Maintenance,
        title: format!("n{id}"),
        message: "check asset".into(),
        created_at: None,
        read: false,
    }
}

#[test]
fn startup_mounts_both_widgets() {
    let sink = MockSink::new();
    let (_tx, rx) = channel();
    let app = DashboardApp::with_sink(sink.clone(), rx, &settings());

    let requests = sink.take();
    assert!(requests.contains(&ApiRequest::DashboardStats));
    assert!(requests.contains(&ApiRequest::RecentActivities));
    assert!(requests.contains(&ApiRequest::UnreadCount { seq: 1 }));
    assert!(app.stats().is_mounted());
    assert!(app.notifications().is_mounted());
}

#[test]
fn replies_are_routed_to_their_widget() {
    let sink = MockSink::new();
    let (tx, rx) = channel();
    let mut app = DashboardApp::with_sink(sink.clone(), rx, &settings());
    let t0 = Instant::now();

    tx.send(ApiReply::DashboardStats(Ok(DashboardStats {
        users_count: Some(4),
        ..DashboardStats::default()
    })))
    .unwrap();
    tx.send(ApiReply::UnreadCount { seq: 1, result: Ok(3) }).unwrap();
    assert_eq!(app.drain_replies(t0), 2);
    assert_eq!(app.drain_replies(t0), 0);

    assert_eq!(app.stats().counter(StatKind::Users).target(), 4);
    assert_eq!(app.notifications().unread_count(), 3);
}

#[test]
fn intents_drive_the_notification_widget() {
    let sink = MockSink::new();
    let (tx, rx) = channel();
    let mut app = DashboardApp::with_sink(sink.clone(), rx, &settings());
    sink.take();
    let t0 = Instant::now();

    app.apply_intents(vec![NotificationIntent::ToggleDropdown], t0);
    assert!(app.notifications().is_dropdown_open());
    assert_eq!(sink.take(), vec![ApiRequest::NotificationList { seq: 1 }]);

    tx.send(ApiReply::NotificationList {
        seq: 1,
        result: Ok(vec![notification(1), notification(2)]),
    })
    .unwrap();
    app.tick(t0 + Duration::from_millis(10));
    assert!(matches!(app.notifications().list(), ListState::Loaded(items) if items.len() == 2));

    app.apply_intents(vec![NotificationIntent::ClickOutside], t0);
    assert!(!app.notifications().is_dropdown_open());
}

#[test]
fn frame_renders_without_panicking() {
    let sink = MockSink::new();
    let (tx, rx) = channel();
    let mut app = DashboardApp::with_sink(sink.clone(), rx, &settings());
    tx.send(ApiReply::MaintenanceAlerts(Ok(2))).unwrap();
    tx.send(ApiReply::MarkAllRead(Ok(()))).unwrap();
    app.notifications_mut().open_dropdown();

    let ctx = egui::Context::default();
    for _ in 0..3 {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
    }

    assert!(app.notifications().banner().current().is_some());
    assert_eq!(app.notifications().toasts().len(), 1);
}

#[test]
fn shutdown_stops_both_widgets() {
    let sink = MockSink::new();
    let (tx, rx) = channel();
    let mut app = DashboardApp::with_sink(sink.clone(), rx, &settings());
    sink.take();
    app.shutdown();

    tx.send(ApiReply::UnreadCount { seq: 1, result: Ok(9) }).unwrap();
    app.tick(Instant::now() + Duration::from_secs(120));
    assert_eq!(app.notifications().unread_count(), 0);
    assert!(sink.take().is_empty());
}

#[test]
fn window_size_is_written_back_to_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"base_url": "http://from-file", "stats_interval_secs": 15, "toast_log": null}"#,
    )
    .unwrap();
    let path = path.to_str().unwrap().to_string();
    let settings = Settings::read(&path).unwrap();

    let sink = MockSink::new();
    let (_tx, rx) = channel();
    let mut app = DashboardApp::with_sink(sink, rx, &settings).with_settings_path(path.clone());
    assert_eq!(app.window_size(), None);

    let mut input = egui::RawInput::default();
    input.viewports.insert(
        egui::ViewportId::ROOT,
        egui::ViewportInfo {
            inner_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            ..Default::default()
        },
    );
    let ctx = egui::Context::default();
    let _ = ctx.run(input, |ctx| app.ui(ctx));
    assert_eq!(app.window_size(), Some((800, 600)));

    app.save_window_size().unwrap();
    let saved = Settings::read(&path).unwrap();
    assert_eq!(saved.window_size, Some((800, 600)));
    assert_eq!(saved.base_url, "http://from-file");
    assert_eq!(saved.stats_interval_secs, 15);
}

#[test]
fn window_size_not_saved_without_settings_path() {
    let sink = MockSink::new();
    let (_tx, rx) = channel();
    let settings = Settings {
        window_size: Some((640, 480)),
        ..settings()
    };
    let app = DashboardApp::with_sink(sink, rx, &settings);
    assert_eq!(app.window_size(), Some((640, 480)));
    assert!(app.save_window_size().is_ok());
}
