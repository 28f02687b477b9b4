pub mod banner;
pub mod toast;
pub mod view;
pub mod widget;

pub use banner::{Banner, BannerSlot};
pub use toast::{Toast, ToastPhase, ToastStack, DEFAULT_TOAST_DURATION, TOAST_EXIT_DELAY};
pub use view::{badge_text, render, render_list, DropdownBody, EntryView, NotificationView};
pub use widget::{ListState, NotificationConfig, NotificationIntent, NotificationWidget};
