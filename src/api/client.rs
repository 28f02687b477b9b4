use anyhow::Context;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::error::FetchError;
use super::types::{
    ActivitiesResponse, Activity, DashboardStats, MaintenanceAlertsResponse, Notification,
    NotificationId, NotificationsResponse, UnreadCountResponse,
};

pub const STATS_PATH: &str = "api/dashboard/stats";
pub const ACTIVITIES_PATH: &str = "api/dashboard/activities";
pub const UNREAD_COUNT_PATH: &str = "api/notifications/count";
pub const NOTIFICATIONS_PATH: &str = "api/notifications";
pub const MARK_ALL_READ_PATH: &str = "api/notifications/mark-all-read";
pub const MAINTENANCE_ALERTS_PATH: &str = "api/maintenance/alerts";

/// Blocking client for the asset management REST API.
///
/// Cheap to share behind an `Arc`; every call is independent and may run on
/// any thread.
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut base =
            Url::parse(base_url).with_context(|| format!("invalid base url '{base_url}'"))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("asset-dashboard client")
            .build()?;
        Ok(Self { client, base })
    }

    fn url(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| FetchError::Transport(format!("bad url for {path}: {e}")))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let resp = self.client.get(self.url(path)?).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn post(&self, path: &str) -> Result<(), FetchError> {
        let resp = self.client.post(self.url(path)?).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(())
    }

    pub fn dashboard_stats(&self) -> Result<DashboardStats, FetchError> {
        self.get_json(STATS_PATH)
    }

    /// `Ok(None)` when the server omitted the `activities` key.
    pub fn recent_activities(&self) -> Result<Option<Vec<Activity>>, FetchError> {
        let resp: ActivitiesResponse = self.get_json(ACTIVITIES_PATH)?;
        Ok(resp.activities)
    }

    pub fn unread_count(&self) -> Result<u32, FetchError> {
        let resp: UnreadCountResponse = self.get_json(UNREAD_COUNT_PATH)?;
        Ok(resp.unread_count.unwrap_or(0))
    }

    pub fn notifications(&self) -> Result<Vec<Notification>, FetchError> {
        let resp: NotificationsResponse = self.get_json(NOTIFICATIONS_PATH)?;
        Ok(resp.notifications.unwrap_or_default())
    }

    /// Ids that would collapse into a dot segment are rejected, since URL
    /// resolution would turn them into a different endpoint.
    pub fn mark_read(&self, id: &NotificationId) -> Result<(), FetchError> {
        let id = id.to_string();
        if id.is_empty() || id.chars().all(|c| c == '.') {
            return Err(FetchError::InvalidId(id));
        }
        self.post(&format!(
            "{NOTIFICATIONS_PATH}/{}/read",
            urlencoding::encode(&id)
        ))
    }

    pub fn mark_all_read(&self) -> Result<(), FetchError> {
        self.post(MARK_ALL_READ_PATH)
    }

    /// Number of assets the server flags as needing urgent maintenance.
    pub fn urgent_maintenance_count(&self) -> Result<usize, FetchError> {
        let resp: MaintenanceAlertsResponse = self.get_json(MAINTENANCE_ALERTS_PATH)?;
        Ok(resp.urgent_maintenance.map(|items| items.len()).unwrap_or(0))
    }
}
