pub mod schedule;
pub mod time_ago;

pub use schedule::Interval;
pub use time_ago::{format_elapsed, parse_timestamp, time_ago};
