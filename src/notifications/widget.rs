use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::banner::BannerSlot;
use super::toast::{ToastStack, DEFAULT_TOAST_DURATION};
use crate::api::{
    ApiRequest, FetchError, Notification, NotificationCategory, NotificationId, RequestSink,
};
use crate::common::Interval;

pub const MARK_ALL_TOAST_TITLE: &str = "Done";
pub const MARK_ALL_TOAST_MESSAGE: &str = "All notifications marked as read";

/// Banner text for `count` assets needing urgent maintenance.
pub fn maintenance_alert_message(count: usize) -> String {
    if count == 1 {
        "Alert: 1 asset needs urgent maintenance!".into()
    } else {
        format!("Alert: {count} assets need urgent maintenance!")
    }
}

#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Period of the unread count and maintenance alert checks.
    pub check_interval: Duration,
    pub toast_duration: Duration,
    pub enable_toasts: bool,
    pub toast_log: Option<PathBuf>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            check_interval: Duration::from_secs(60),
            toast_duration: DEFAULT_TOAST_DURATION,
            enable_toasts: true,
            toast_log: None,
        }
    }
}

/// Content of the dropdown list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// No reply has arrived yet.
    Loading,
    Loaded(Vec<Notification>),
    /// Empty list, or the server answered with an error status.
    Empty,
    /// The request failed in transit; the user may retry.
    Failed,
}

/// User intents coming back from the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationIntent {
    ToggleDropdown,
    ClickOutside,
    Retry,
    MarkAsRead(NotificationId),
    MarkAllAsRead,
    DismissToast(u64),
    HideBanner,
}

/// Bell, dropdown, toast stack and banner.
///
/// All state lives on the UI thread. Requests go out through the sink and
/// their replies come back through the `on_*` handlers; a handler called
/// after [`NotificationWidget::destroy`] does nothing.
pub struct NotificationWidget {
    sink: Arc<dyn RequestSink>,
    cfg: NotificationConfig,
    unread_count: u32,
    dropdown_open: bool,
    list: ListState,
    list_seq: u64,
    count_seq: u64,
    /// Count replies with a sequence at or below this are stale.
    count_applied: u64,
    toasts: ToastStack,
    banner: BannerSlot,
    check_timer: Interval,
    mounted: bool,
}

impl NotificationWidget {
    pub fn new(sink: Arc<dyn RequestSink>, cfg: NotificationConfig) -> Self {
        let toasts = ToastStack::with_log(cfg.toast_log.clone());
        let check_timer = Interval::new(cfg.check_interval);
        Self {
            sink,
            cfg,
            unread_count: 0,
            dropdown_open: false,
            list: ListState::Loading,
            list_seq: 0,
            count_seq: 0,
            count_applied: 0,
            toasts,
            banner: BannerSlot::default(),
            check_timer,
            mounted: false,
        }
    }

    /// Load the initial count and start the periodic checks.
    pub fn mount(&mut self, now: Instant) {
        self.mounted = true;
        self.check_timer.start(now);
        self.fetch_count();
        tracing::info!("notification widget ready");
    }

    /// Cancel the periodic checks. Replies still in flight are ignored when
    /// they land.
    pub fn destroy(&mut self) {
        if self.mounted {
            tracing::debug!("notification widget destroyed");
        }
        self.mounted = false;
        self.check_timer.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        if self.check_timer.poll(now) {
            self.fetch_count();
            self.check_maintenance_alerts();
        }
        self.toasts.tick(now)
    }

    pub fn apply(&mut self, intent: NotificationIntent, now: Instant) {
        match intent {
            NotificationIntent::ToggleDropdown => self.toggle_dropdown(),
            NotificationIntent::ClickOutside => self.click_outside(),
            NotificationIntent::Retry => self.fetch_list(),
            NotificationIntent::MarkAsRead(id) => self.mark_as_read(id),
            NotificationIntent::MarkAllAsRead => self.mark_all_as_read(),
            NotificationIntent::DismissToast(id) => self.toasts.dismiss(id, now),
            NotificationIntent::HideBanner => self.hide_banner(),
        }
    }

    pub fn toggle_dropdown(&mut self) {
        if self.dropdown_open {
            self.close_dropdown();
        } else {
            self.open_dropdown();
        }
    }

    pub fn open_dropdown(&mut self) {
        if self.dropdown_open || !self.mounted {
            return;
        }
        self.dropdown_open = true;
        self.fetch_list();
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// A press landed outside both the dropdown and the bell.
    pub fn click_outside(&mut self) {
        self.close_dropdown();
    }

    pub fn fetch_count(&mut self) {
        if !self.mounted {
            return;
        }
        self.count_seq += 1;
        self.sink.submit(ApiRequest::UnreadCount {
            seq: self.count_seq,
        });
    }

    pub fn fetch_list(&mut self) {
        if !self.mounted {
            return;
        }
        self.list_seq += 1;
        self.sink.submit(ApiRequest::NotificationList { seq: self.list_seq });
    }

    pub fn mark_as_read(&mut self, id: NotificationId) {
        if !self.mounted {
            return;
        }
        self.sink.submit(ApiRequest::MarkRead { id });
    }

    pub fn mark_all_as_read(&mut self) {
        if !self.mounted {
            return;
        }
        self.sink.submit(ApiRequest::MarkAllRead);
    }

    pub fn check_maintenance_alerts(&mut self) {
        if !self.mounted {
            return;
        }
        self.sink.submit(ApiRequest::MaintenanceAlerts);
    }

    pub fn show_toast(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
        duration: Option<Duration>,
        now: Instant,
    ) -> Option<u64> {
        if !self.mounted || !self.cfg.enable_toasts {
            return None;
        }
        let duration = duration.unwrap_or(self.cfg.toast_duration);
        Some(self.toasts.push(title, message, category, duration, now))
    }

    pub fn show_banner(&mut self, message: impl Into<String>, category: NotificationCategory) {
        self.banner.show(message, category);
    }

    pub fn hide_banner(&mut self) {
        self.banner.hide();
    }

    pub fn on_unread_count(&mut self, seq: u64, result: Result<u32, FetchError>) {
        if !self.mounted {
            return;
        }
        match result {
            Ok(_) if seq <= self.count_applied => {
                tracing::debug!(seq, "dropping stale unread count");
            }
            Ok(count) => {
                self.count_applied = seq;
                self.unread_count = count;
            }
            Err(err) => tracing::debug!("unread count refresh paused: {err}"),
        }
    }

    pub fn on_notification_list(
        &mut self,
        seq: u64,
        result: Result<Vec<Notification>, FetchError>,
    ) {
        if !self.mounted {
            return;
        }
        if seq != self.list_seq {
            tracing::debug!(seq, latest = self.list_seq, "dropping superseded notification list");
            return;
        }
        self.list = match result {
            Ok(list) if list.is_empty() => ListState::Empty,
            Ok(list) => ListState::Loaded(list),
            Err(err) if err.is_retryable() => {
                tracing::warn!("failed to load notifications: {err}");
                ListState::Failed
            }
            Err(err) => {
                tracing::debug!("notification list unavailable: {err}");
                ListState::Empty
            }
        };
    }

    pub fn on_mark_read(&mut self, id: &NotificationId, result: Result<(), FetchError>) {
        if !self.mounted {
            return;
        }
        match result {
            Ok(()) => {
                self.fetch_list();
                self.fetch_count();
            }
            Err(err) => tracing::warn!(%id, "marking notification as read failed: {err}"),
        }
    }

    pub fn on_mark_all_read(&mut self, result: Result<(), FetchError>, now: Instant) {
        if !self.mounted {
            return;
        }
        match result {
            Ok(()) => {
                self.fetch_list();
                // counts requested before the server confirmed are now stale
                self.count_applied = self.count_seq;
                self.unread_count = 0;
                self.show_toast(
                    MARK_ALL_TOAST_TITLE,
                    MARK_ALL_TOAST_MESSAGE,
                    NotificationCategory::Success,
                    None,
                    now,
                );
            }
            Err(err) => tracing::warn!("marking all notifications as read failed: {err}"),
        }
    }

    pub fn on_maintenance_alerts(&mut self, result: Result<usize, FetchError>) {
        if !self.mounted {
            return;
        }
        match result {
            Ok(0) => {}
            Ok(count) => self.show_banner(
                maintenance_alert_message(count),
                NotificationCategory::Warning,
            ),
            Err(err) => tracing::debug!("maintenance alert check paused: {err}"),
        }
    }

    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// Sequence number of the most recently issued list fetch.
    pub fn list_seq(&self) -> u64 {
        self.list_seq
    }

    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    pub fn banner(&self) -> &BannerSlot {
        &self.banner
    }
}
