use std::time::{Duration, Instant};

/// Fixed-period timer polled from the frame loop.
///
/// An interval is inert until [`Interval::start`] arms it. Ticks that were
/// missed while the loop was stalled collapse into a single tick.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Arm the timer so the first tick fires one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` when a tick is due and schedules the following one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(due) if now >= due => {
                let mut next = due + self.period;
                if next <= now {
                    next = now + self.period;
                }
                self.next = Some(next);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_started() {
        let now = Instant::now();
        let mut interval = Interval::new(Duration::from_secs(30));
        assert!(!interval.poll(now + Duration::from_secs(120)));
        assert!(!interval.is_running());
    }

    #[test]
    fn fires_once_per_period() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::from_secs(30));
        interval.start(start);
        assert!(!interval.poll(start + Duration::from_secs(29)));
        assert!(interval.poll(start + Duration::from_secs(30)));
        assert!(!interval.poll(start + Duration::from_secs(31)));
        assert!(interval.poll(start + Duration::from_secs(60)));
    }

    #[test]
    fn missed_ticks_collapse() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::from_secs(1));
        interval.start(start);
        assert!(interval.poll(start + Duration::from_secs(10)));
        assert!(!interval.poll(start + Duration::from_millis(10_500)));
        assert!(interval.poll(start + Duration::from_secs(11)));
    }

    #[test]
    fn cancel_stops_ticks() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::from_secs(1));
        interval.start(start);
        interval.cancel();
        assert!(!interval.poll(start + Duration::from_secs(5)));
    }
}
