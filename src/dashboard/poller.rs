use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::counter::AnimatedCounter;
use crate::api::{Activity, ApiRequest, DashboardStats, FetchError, RequestSink};
use crate::common::Interval;

/// The four aggregate counters shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    TotalAssets,
    ActiveAssets,
    Maintenance,
    Users,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::TotalAssets,
        StatKind::ActiveAssets,
        StatKind::Maintenance,
        StatKind::Users,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::TotalAssets => "Total assets",
            StatKind::ActiveAssets => "Active assets",
            StatKind::Maintenance => "In maintenance",
            StatKind::Users => "Users",
        }
    }

    fn index(self) -> usize {
        match self {
            StatKind::TotalAssets => 0,
            StatKind::ActiveAssets => 1,
            StatKind::Maintenance => 2,
            StatKind::Users => 3,
        }
    }

    fn pick(self, stats: &DashboardStats) -> Option<u64> {
        match self {
            StatKind::TotalAssets => stats.total_assets,
            StatKind::ActiveAssets => stats.active_assets,
            StatKind::Maintenance => stats.maintenance_count,
            StatKind::Users => stats.users_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatPollerConfig {
    pub stats_interval: Duration,
    pub activities_interval: Duration,
    pub clock_interval: Duration,
}

impl Default for StatPollerConfig {
    fn default() -> Self {
        Self {
            stats_interval: Duration::from_secs(30),
            activities_interval: Duration::from_secs(60),
            clock_interval: Duration::from_secs(1),
        }
    }
}

/// Best-effort poller for the dashboard counters and activity feed.
///
/// Every failure is logged and dropped; the previous values stay on screen
/// until the next scheduled poll succeeds.
pub struct StatPoller {
    sink: Arc<dyn RequestSink>,
    counters: [AnimatedCounter; 4],
    activities: Vec<Activity>,
    clock: DateTime<Local>,
    stats_timer: Interval,
    activities_timer: Interval,
    clock_timer: Interval,
    mounted: bool,
}

impl StatPoller {
    pub fn new(sink: Arc<dyn RequestSink>, cfg: StatPollerConfig) -> Self {
        Self {
            sink,
            counters: Default::default(),
            activities: Vec::new(),
            clock: Local::now(),
            stats_timer: Interval::new(cfg.stats_interval),
            activities_timer: Interval::new(cfg.activities_interval),
            clock_timer: Interval::new(cfg.clock_interval),
            mounted: false,
        }
    }

    /// Issue the initial fetches and start the timers.
    pub fn mount(&mut self, now: Instant, wall: DateTime<Local>) {
        self.mounted = true;
        self.clock = wall;
        self.refresh_stats();
        self.refresh_activities();
        self.stats_timer.start(now);
        self.activities_timer.start(now);
        self.clock_timer.start(now);
    }

    /// Stop the timers and ignore any reply still in flight.
    pub fn destroy(&mut self) {
        self.mounted = false;
        self.stats_timer.cancel();
        self.activities_timer.cancel();
        self.clock_timer.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Drive timers and counter animations. Returns `true` if anything on
    /// screen may have changed.
    pub fn tick(&mut self, now: Instant, wall: DateTime<Local>) -> bool {
        if !self.mounted {
            return false;
        }
        let mut changed = false;
        if self.clock_timer.poll(now) {
            self.clock = wall;
            changed = true;
        }
        if self.stats_timer.poll(now) {
            self.refresh_stats();
        }
        if self.activities_timer.poll(now) {
            self.refresh_activities();
        }
        for counter in &mut self.counters {
            changed |= counter.advance(now);
        }
        changed
    }

    pub fn refresh_stats(&self) {
        self.sink.submit(ApiRequest::DashboardStats);
    }

    pub fn refresh_activities(&self) {
        self.sink.submit(ApiRequest::RecentActivities);
    }

    pub fn on_stats(&mut self, result: Result<DashboardStats, FetchError>, now: Instant) {
        if !self.mounted {
            return;
        }
        match result {
            Ok(stats) => self.apply_stats(&stats, now),
            Err(err) => tracing::debug!("stats refresh paused: {err}"),
        }
    }

    pub fn on_activities(&mut self, result: Result<Option<Vec<Activity>>, FetchError>) {
        if !self.mounted {
            return;
        }
        match result {
            Ok(Some(activities)) => self.activities = activities,
            Ok(None) => tracing::debug!("activities reply without an activities list"),
            Err(err) => tracing::debug!("activities refresh paused: {err}"),
        }
    }

    /// Start animating every counter present in `stats`.
    pub fn apply_stats(&mut self, stats: &DashboardStats, now: Instant) {
        for kind in StatKind::ALL {
            if let Some(value) = kind.pick(stats) {
                self.counters[kind.index()].animate_to(value, now);
            }
        }
    }

    pub fn counter(&self, kind: StatKind) -> &AnimatedCounter {
        &self.counters[kind.index()]
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn clock(&self) -> DateTime<Local> {
        self.clock
    }
}
