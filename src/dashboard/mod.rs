pub mod counter;
pub mod poller;
pub mod view;

pub use counter::{AnimatedCounter, ANIMATION_STEPS, STEP_INTERVAL};
pub use poller::{StatKind, StatPoller, StatPollerConfig};
pub use view::{render, ActivityView, CounterView, StatsView};
