use std::time::{Duration, Instant};

/// Number of discrete steps in a counter animation.
pub const ANIMATION_STEPS: u32 = 20;
/// Delay between two animation steps.
pub const STEP_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
struct Animation {
    current: f64,
    increment: f64,
    target: u64,
    steps_left: u32,
    next_step: Instant,
}

/// Integer readout that eases towards a new value in fixed steps.
#[derive(Debug, Clone, Default)]
pub struct AnimatedCounter {
    displayed: u64,
    animation: Option<Animation>,
}

impl AnimatedCounter {
    pub fn new(initial: u64) -> Self {
        Self {
            displayed: initial,
            animation: None,
        }
    }

    /// Value currently shown to the user.
    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    /// Value the counter is heading to.
    pub fn target(&self) -> u64 {
        self.animation
            .as_ref()
            .map(|a| a.target)
            .unwrap_or(self.displayed)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start animating from the displayed value to `target`. Any running
    /// animation is replaced. The first step lands one [`STEP_INTERVAL`]
    /// after `now`.
    pub fn animate_to(&mut self, target: u64, now: Instant) {
        if target == self.displayed {
            self.animation = None;
            return;
        }
        let start = self.displayed as f64;
        self.animation = Some(Animation {
            current: start,
            increment: (target as f64 - start) / f64::from(ANIMATION_STEPS),
            target,
            steps_left: ANIMATION_STEPS,
            next_step: now + STEP_INTERVAL,
        });
    }

    /// Apply a single step regardless of timing. Returns `true` while more
    /// steps remain.
    pub fn step(&mut self) -> bool {
        let Some(anim) = self.animation.as_mut() else {
            return false;
        };
        anim.current += anim.increment;
        anim.steps_left = anim.steps_left.saturating_sub(1);
        let target = anim.target as f64;
        let reached = (anim.increment > 0.0 && anim.current >= target)
            || (anim.increment < 0.0 && anim.current <= target);
        if reached || anim.steps_left == 0 {
            self.displayed = anim.target;
            self.animation = None;
            false
        } else {
            self.displayed = anim.current.round().max(0.0) as u64;
            true
        }
    }

    /// Apply every step whose deadline is at or before `now`. Returns `true`
    /// if the displayed value may have changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(due) = self.animation.as_ref().map(|a| a.next_step) {
            if now < due {
                break;
            }
            changed = true;
            if self.step() {
                if let Some(anim) = self.animation.as_mut() {
                    anim.next_step = due + STEP_INTERVAL;
                }
            }
        }
        changed
    }
}
