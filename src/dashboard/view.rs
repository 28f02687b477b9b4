use chrono::{DateTime, Utc};

use super::poller::{StatKind, StatPoller};
use crate::api::ActivityCategory;
use crate::common::time_ago;

pub const NO_ACTIVITY_MESSAGE: &str = "No recent activity";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub kind: StatKind,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityView {
    pub category: ActivityCategory,
    pub title: String,
    pub description: String,
    pub time_ago: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub time: String,
    pub date: String,
    pub counters: Vec<CounterView>,
    pub activities: Vec<ActivityView>,
}

/// Describe what the stats area should show. `now` is only used for the
/// relative activity timestamps.
pub fn render(poller: &StatPoller, now: DateTime<Utc>) -> StatsView {
    let clock = poller.clock();
    StatsView {
        time: clock.format("%H:%M:%S").to_string(),
        date: clock.format("%A, %-d %B %Y").to_string(),
        counters: StatKind::ALL
            .iter()
            .map(|&kind| CounterView {
                kind,
                label: kind.label(),
                value: poller.counter(kind).displayed().to_string(),
            })
            .collect(),
        activities: poller
            .activities()
            .iter()
            .map(|activity| ActivityView {
                category: activity.category,
                title: activity.title.clone(),
                description: activity.description.clone(),
                time_ago: activity
                    .timestamp
                    .as_deref()
                    .map(|ts| time_ago(ts, now))
                    .unwrap_or_default(),
            })
            .collect(),
    }
}
