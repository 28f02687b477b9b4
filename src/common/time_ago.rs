use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Parse a server timestamp. RFC 3339 strings keep their offset; naive
/// ISO timestamps are taken to be local time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Bucket an elapsed number of seconds. Values are floored, never rounded.
pub fn format_elapsed(seconds: i64) -> String {
    if seconds < 60 {
        return "now".into();
    }
    let (n, unit) = if seconds < 3_600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3_600, "hour")
    } else {
        (seconds / 86_400, "day")
    };
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Human readable age of `raw` relative to `now`. Unparseable timestamps
/// yield an empty string.
pub fn time_ago(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(ts) => format_elapsed((now - ts).num_seconds()),
        None => String::new(),
    }
}
