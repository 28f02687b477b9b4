mod notification_ui;
mod stats_panel;
pub mod theme;

use crate::api::{ApiClient, ApiReply, HttpDispatcher, RequestSink};
use crate::dashboard::{self, StatPoller};
use crate::notifications::{self, NotificationIntent, NotificationWidget};
use crate::settings::Settings;
use chrono::{Local, Utc};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Upper bound between two frames so animations and toasts keep moving
/// without user input.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Application shell owning both dashboard widgets.
///
/// The egui frame loop plays the role of the page's event loop: replies from
/// worker threads are drained at the top of every frame, timers are polled,
/// then both widgets are rendered to views and painted.
pub struct DashboardApp {
    stats: StatPoller,
    notifications: NotificationWidget,
    replies: Receiver<ApiReply>,
    /// Settings file the window size is written back to on exit.
    settings_path: Option<String>,
    window_size: Option<(i32, i32)>,
}

impl DashboardApp {
    pub fn new(ctx: &egui::Context, client: Arc<ApiClient>, settings: &Settings) -> Self {
        let (tx, rx) = channel();
        let dispatcher = HttpDispatcher::new(client, tx).with_repaint(ctx.clone());
        Self::with_sink(Arc::new(dispatcher), rx, settings)
    }

    /// Build and mount the widgets against an arbitrary request sink.
    pub fn with_sink(
        sink: Arc<dyn RequestSink>,
        replies: Receiver<ApiReply>,
        settings: &Settings,
    ) -> Self {
        let mut stats = StatPoller::new(Arc::clone(&sink), settings.stat_poller_config());
        let mut notifications = NotificationWidget::new(sink, settings.notification_config());
        let now = Instant::now();
        stats.mount(now, Local::now());
        notifications.mount(now);
        tracing::info!(base_url = %settings.base_url, "dashboard started");
        Self {
            stats,
            notifications,
            replies,
            settings_path: None,
            window_size: settings.window_size,
        }
    }

    /// Persist the window size to `path` when the window closes.
    pub fn with_settings_path(mut self, path: impl Into<String>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    pub fn window_size(&self) -> Option<(i32, i32)> {
        self.window_size
    }

    /// Write the last seen window size into the settings file, keeping every
    /// other field as it is on disk.
    pub fn save_window_size(&self) -> anyhow::Result<()> {
        let (Some(path), Some(size)) = (&self.settings_path, self.window_size) else {
            return Ok(());
        };
        let mut settings = Settings::read(path)?;
        settings.window_size = Some(size);
        settings.save(path)
    }

    pub fn stats(&self) -> &StatPoller {
        &self.stats
    }

    pub fn notifications(&self) -> &NotificationWidget {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationWidget {
        &mut self.notifications
    }

    /// Route a reply to the widget that asked for it.
    pub fn handle_reply(&mut self, reply: ApiReply, now: Instant) {
        match reply {
            ApiReply::DashboardStats(result) => self.stats.on_stats(result, now),
            ApiReply::RecentActivities(result) => self.stats.on_activities(result),
            ApiReply::UnreadCount { seq, result } => {
                self.notifications.on_unread_count(seq, result)
            }
            ApiReply::NotificationList { seq, result } => {
                self.notifications.on_notification_list(seq, result)
            }
            ApiReply::MarkRead { id, result } => self.notifications.on_mark_read(&id, result),
            ApiReply::MarkAllRead(result) => self.notifications.on_mark_all_read(result, now),
            ApiReply::MaintenanceAlerts(result) => self.notifications.on_maintenance_alerts(result),
        }
    }

    /// Apply every reply that has arrived so far. Returns how many were
    /// handled.
    pub fn drain_replies(&mut self, now: Instant) -> usize {
        let mut handled = 0;
        while let Ok(reply) = self.replies.try_recv() {
            self.handle_reply(reply, now);
            handled += 1;
        }
        handled
    }

    /// One pass of the scheduler: replies first, then timers.
    pub fn tick(&mut self, now: Instant) {
        self.drain_replies(now);
        self.stats.tick(now, Local::now());
        self.notifications.tick(now);
    }

    pub fn apply_intents(&mut self, intents: Vec<NotificationIntent>, now: Instant) {
        for intent in intents {
            self.notifications.apply(intent, now);
        }
    }

    /// Stop all timers. Replies still in flight are ignored afterwards.
    pub fn shutdown(&mut self) {
        self.stats.destroy();
        self.notifications.destroy();
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.tick(now);
        let inner = ctx.input(|i| {
            i.raw
                .viewports
                .get(&i.raw.viewport_id)
                .and_then(|v| v.inner_rect)
        });
        if let Some(rect) = inner {
            self.window_size = Some((rect.width() as i32, rect.height() as i32));
        }

        let wall = Utc::now();
        let stats_view = dashboard::render(&self.stats, wall);
        let note_view = notifications::render(&self.notifications, wall);
        let mut intents = Vec::new();

        let mut bell_rect = egui::Rect::NOTHING;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Asset Dashboard");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let bell = notification_ui::bell(ui, &note_view);
                    if bell.clicked() {
                        intents.push(NotificationIntent::ToggleDropdown);
                    }
                    bell_rect = bell.rect;
                    ui.separator();
                    ui.label(egui::RichText::new(&stats_view.time).monospace());
                    ui.label(egui::RichText::new(&stats_view.date).weak());
                });
            });
        });

        notification_ui::banner(ctx, &note_view, &mut intents);

        egui::CentralPanel::default().show(ctx, |ui| {
            stats_panel::show(ui, &stats_view);
        });

        if let Some(body) = &note_view.dropdown {
            let dropdown_rect =
                notification_ui::dropdown(ctx, bell_rect.right_bottom(), body, &mut intents);
            let outside_press = ctx.input(|i| {
                i.pointer.any_pressed()
                    && i.pointer
                        .interact_pos()
                        .map(|pos| !dropdown_rect.contains(pos) && !bell_rect.contains(pos))
                        .unwrap_or(false)
            });
            if outside_press {
                intents.push(NotificationIntent::ClickOutside);
            }
        }

        notification_ui::toasts(ctx, &note_view, &mut intents);

        self.apply_intents(intents, now);
        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.shutdown();
        if let Err(err) = self.save_window_size() {
            tracing::warn!("failed to save window size: {err}");
        }
    }
}

impl Drop for DashboardApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}
