use eframe::egui;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use super::client::ApiClient;
use super::error::FetchError;
use super::types::{Activity, DashboardStats, Notification, NotificationId};

/// A request a widget wants performed. Widgets never talk to the network
/// directly; they hand requests to a [`RequestSink`] and later receive the
/// matching [`ApiReply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    DashboardStats,
    RecentActivities,
    UnreadCount { seq: u64 },
    NotificationList { seq: u64 },
    MarkRead { id: NotificationId },
    MarkAllRead,
    MaintenanceAlerts,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    DashboardStats(Result<DashboardStats, FetchError>),
    RecentActivities(Result<Option<Vec<Activity>>, FetchError>),
    UnreadCount {
        seq: u64,
        result: Result<u32, FetchError>,
    },
    NotificationList {
        seq: u64,
        result: Result<Vec<Notification>, FetchError>,
    },
    MarkRead {
        id: NotificationId,
        result: Result<(), FetchError>,
    },
    MarkAllRead(Result<(), FetchError>),
    MaintenanceAlerts(Result<usize, FetchError>),
}

impl ApiRequest {
    /// Perform the request synchronously.
    pub fn execute(self, client: &ApiClient) -> ApiReply {
        match self {
            ApiRequest::DashboardStats => ApiReply::DashboardStats(client.dashboard_stats()),
            ApiRequest::RecentActivities => {
                ApiReply::RecentActivities(client.recent_activities())
            }
            ApiRequest::UnreadCount { seq } => ApiReply::UnreadCount {
                seq,
                result: client.unread_count(),
            },
            ApiRequest::NotificationList { seq } => ApiReply::NotificationList {
                seq,
                result: client.notifications(),
            },
            ApiRequest::MarkRead { id } => {
                let result = client.mark_read(&id);
                ApiReply::MarkRead { id, result }
            }
            ApiRequest::MarkAllRead => ApiReply::MarkAllRead(client.mark_all_read()),
            ApiRequest::MaintenanceAlerts => {
                ApiReply::MaintenanceAlerts(client.urgent_maintenance_count())
            }
        }
    }
}

/// Destination for outgoing requests.
pub trait RequestSink {
    fn submit(&self, request: ApiRequest);
}

/// Runs every request on its own worker thread and posts the reply back to
/// the UI thread over a channel. Requests are never cancelled; overlapping
/// requests simply race.
pub struct HttpDispatcher {
    client: Arc<ApiClient>,
    replies: Sender<ApiReply>,
    repaint: Option<egui::Context>,
}

impl HttpDispatcher {
    pub fn new(client: Arc<ApiClient>, replies: Sender<ApiReply>) -> Self {
        Self {
            client,
            replies,
            repaint: None,
        }
    }

    /// Wake the egui loop whenever a reply lands.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }
}

impl RequestSink for HttpDispatcher {
    fn submit(&self, request: ApiRequest) {
        let client = Arc::clone(&self.client);
        let replies = self.replies.clone();
        let repaint = self.repaint.clone();
        tracing::trace!(?request, "dispatching request");
        let spawned = thread::Builder::new()
            .name("api-request".into())
            .spawn(move || {
                let reply = request.execute(&client);
                if replies.send(reply).is_err() {
                    tracing::debug!("reply dropped: dashboard already closed");
                    return;
                }
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            });
        if let Err(err) = spawned {
            tracing::warn!("failed to spawn request worker: {err}");
        }
    }
}
