use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::api::NotificationCategory;
use crate::toast_log::append_toast_log;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5_000);
/// Time a dismissed toast stays around so its exit transition can play.
pub const TOAST_EXIT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted this frame, not yet drawn.
    Entering,
    Visible,
    /// Playing its exit transition; removed once [`TOAST_EXIT_DELAY`] passes.
    Leaving,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    phase: ToastPhase,
    inserted_at: Instant,
    duration: Duration,
    leaving_since: Option<Instant>,
}

impl Toast {
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != ToastPhase::Entering
    }

    fn leave(&mut self, at: Instant) {
        if self.leaving_since.is_none() {
            self.phase = ToastPhase::Leaving;
            self.leaving_since = Some(at);
        }
    }
}

/// Stack of self-dismissing toasts in insertion order.
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
    log_path: Option<PathBuf>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every pushed toast in `path`.
    pub fn with_log(log_path: Option<PathBuf>) -> Self {
        Self {
            log_path,
            ..Self::default()
        }
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        category: NotificationCategory,
        duration: Duration,
        now: Instant,
    ) -> u64 {
        self.next_id += 1;
        let toast = Toast {
            id: self.next_id,
            title: title.into(),
            message: message.into(),
            category,
            phase: ToastPhase::Entering,
            inserted_at: now,
            duration,
            leaving_since: None,
        };
        if let Some(path) = &self.log_path {
            append_toast_log(path, &format!("{}: {}", toast.title, toast.message));
        }
        self.toasts.push(toast);
        self.next_id
    }

    /// Start the exit transition early. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64, now: Instant) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.leave(now);
        }
    }

    /// Advance every toast's lifecycle. A toast becomes visible on the first
    /// tick strictly after the instant it was inserted. Returns `true` if the
    /// stack changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for toast in &mut self.toasts {
            if toast.phase == ToastPhase::Entering && now > toast.inserted_at {
                toast.phase = ToastPhase::Visible;
                changed = true;
            }
            let expires = toast.inserted_at + toast.duration;
            if toast.phase != ToastPhase::Leaving && now >= expires {
                toast.leave(expires);
                changed = true;
            }
        }
        let before = self.toasts.len();
        self.toasts.retain(|t| match t.leaving_since {
            Some(since) => now < since + TOAST_EXIT_DELAY,
            None => true,
        });
        changed || self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
