use asset_dashboard::api::{
    ApiClient, ApiReply, ApiRequest, FetchError, HttpDispatcher, NotificationId, RequestSink,
};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(5);

fn dispatcher(server: &MockServer) -> (HttpDispatcher, std::sync::mpsc::Receiver<ApiReply>) {
    let client = ApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    let (tx, rx) = channel();
    (HttpDispatcher::new(Arc::new(client), tx), rx)
}

#[test]
fn unread_count_reply_carries_sequence() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/api/notifications/count");
        then.status(200).json_body(json!({"unread_count": 7}));
    });
    let (dispatcher, rx) = dispatcher(&server);
    dispatcher.submit(ApiRequest::UnreadCount { seq: 3 });
    assert_eq!(
        rx.recv_timeout(WAIT).unwrap(),
        ApiReply::UnreadCount {
            seq: 3,
            result: Ok(7)
        }
    );
}

#[test]
fn mark_read_reply_echoes_id() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(POST).path("/api/notifications/12/read");
        then.status(404);
    });
    let (dispatcher, rx) = dispatcher(&server);
    dispatcher.submit(ApiRequest::MarkRead {
        id: NotificationId::Number(12),
    });
    assert_eq!(
        rx.recv_timeout(WAIT).unwrap(),
        ApiReply::MarkRead {
            id: NotificationId::Number(12),
            result: Err(FetchError::Status(404))
        }
    );
}

#[test]
fn concurrent_requests_all_reply() {
    let server = MockServer::start();
    let _stats = server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/stats");
        then.status(200).json_body(json!({"total_assets": 1}));
    });
    let _alerts = server.mock(|when, then| {
        when.method(GET).path("/api/maintenance/alerts");
        then.status(200).json_body(json!({"urgent_maintenance": [{"id": 1}]}));
    });
    let (dispatcher, rx) = dispatcher(&server);
    dispatcher.submit(ApiRequest::DashboardStats);
    dispatcher.submit(ApiRequest::MaintenanceAlerts);

    let mut replies = vec![rx.recv_timeout(WAIT).unwrap(), rx.recv_timeout(WAIT).unwrap()];
    replies.sort_by_key(|r| matches!(r, ApiReply::MaintenanceAlerts(_)));
    assert!(matches!(&replies[0], ApiReply::DashboardStats(Ok(s)) if s.total_assets == Some(1)));
    assert_eq!(replies[1], ApiReply::MaintenanceAlerts(Ok(1)));
}

#[test]
fn dropped_receiver_does_not_panic_worker() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(POST).path("/api/notifications/mark-all-read");
        then.status(200);
    });
    let (dispatcher, rx) = dispatcher(&server);
    drop(rx);
    dispatcher.submit(ApiRequest::MarkAllRead);
    std::thread::sleep(Duration::from_millis(300));
    m.assert();
}
