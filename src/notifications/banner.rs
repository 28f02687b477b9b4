use crate::api::NotificationCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub category: NotificationCategory,
}

/// Single page-wide banner. Showing a new banner replaces the old one.
#[derive(Debug, Clone, Default)]
pub struct BannerSlot {
    current: Option<Banner>,
}

impl BannerSlot {
    pub fn show(&mut self, message: impl Into<String>, category: NotificationCategory) {
        self.current = Some(Banner {
            message: message.into(),
            category,
        });
    }

    pub fn hide(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }
}
