use chrono::{DateTime, Utc};

use super::toast::ToastPhase;
use super::widget::{ListState, NotificationWidget};
use crate::api::{Notification, NotificationCategory, NotificationId};
use crate::common::time_ago;

pub const LOADING_MESSAGE: &str = "Loading notifications...";
pub const EMPTY_MESSAGE: &str = "No new notifications";
pub const FAILED_MESSAGE: &str = "Failed to load notifications";
pub const RETRY_LABEL: &str = "Retry";
pub const MARK_ALL_LABEL: &str = "Mark all as read";

/// Badge text for `count` unread notifications, `None` when the badge is
/// hidden.
pub fn badge_text(count: u32) -> Option<String> {
    match count {
        0 => None,
        c if c > 99 => Some("99+".into()),
        c => Some(c.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub id: NotificationId,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    pub time_ago: String,
    pub unread: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownBody {
    Loading,
    Empty,
    /// Transport failure with a retry affordance.
    Failed,
    Entries(Vec<EntryView>),
}

impl DropdownBody {
    /// Placeholder text for the non-list states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DropdownBody::Loading => Some(LOADING_MESSAGE),
            DropdownBody::Empty => Some(EMPTY_MESSAGE),
            DropdownBody::Failed => Some(FAILED_MESSAGE),
            DropdownBody::Entries(_) => None,
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, DropdownBody::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub leaving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub message: String,
    pub category: NotificationCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub badge: Option<String>,
    /// `None` while the dropdown is closed.
    pub dropdown: Option<DropdownBody>,
    pub banner: Option<BannerView>,
    /// Toasts to draw, oldest first. Toasts inserted this frame are omitted.
    pub toasts: Vec<ToastView>,
}

fn entry_view(notification: &Notification, now: DateTime<Utc>) -> EntryView {
    EntryView {
        id: notification.id.clone(),
        category: notification.category,
        title: notification.title.clone(),
        message: notification.message.clone(),
        time_ago: notification
            .created_at
            .as_deref()
            .map(|ts| time_ago(ts, now))
            .unwrap_or_default(),
        unread: !notification.read,
    }
}

pub fn render_list(list: &ListState, now: DateTime<Utc>) -> DropdownBody {
    match list {
        ListState::Loading => DropdownBody::Loading,
        ListState::Empty => DropdownBody::Empty,
        ListState::Failed => DropdownBody::Failed,
        ListState::Loaded(items) if items.is_empty() => DropdownBody::Empty,
        ListState::Loaded(items) => {
            DropdownBody::Entries(items.iter().map(|n| entry_view(n, now)).collect())
        }
    }
}

pub fn render(widget: &NotificationWidget, now: DateTime<Utc>) -> NotificationView {
    NotificationView {
        badge: badge_text(widget.unread_count()),
        dropdown: widget
            .is_dropdown_open()
            .then(|| render_list(widget.list(), now)),
        banner: widget.banner().current().map(|b| BannerView {
            message: b.message.clone(),
            category: b.category,
        }),
        toasts: widget
            .toasts()
            .iter()
            .filter(|t| t.is_visible())
            .map(|t| ToastView {
                id: t.id,
                title: t.title.clone(),
                message: t.message.clone(),
                category: t.category,
                leaving: t.phase() == ToastPhase::Leaving,
            })
            .collect(),
    }
}
