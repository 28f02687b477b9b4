use crate::api::NotificationCategory;
use eframe::egui;

/// Accent colour for a notification category.
pub fn category_color(category: NotificationCategory) -> egui::Color32 {
    match category {
        NotificationCategory::Success => egui::Color32::from_rgb(16, 185, 129),
        NotificationCategory::Warning | NotificationCategory::Maintenance => {
            egui::Color32::from_rgb(245, 158, 11)
        }
        NotificationCategory::Danger | NotificationCategory::Security => {
            egui::Color32::from_rgb(239, 68, 68)
        }
        NotificationCategory::Warranty | NotificationCategory::License => {
            egui::Color32::from_rgb(139, 92, 246)
        }
        NotificationCategory::Info | NotificationCategory::System | NotificationCategory::Other => {
            egui::Color32::from_rgb(59, 130, 246)
        }
    }
}

/// Background used for unread entries in the dropdown.
pub fn unread_fill(visuals: &egui::Visuals) -> egui::Color32 {
    if visuals.dark_mode {
        egui::Color32::from_rgba_unmultiplied(59, 130, 246, 40)
    } else {
        egui::Color32::from_rgba_unmultiplied(59, 130, 246, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::category_color;
    use crate::api::NotificationCategory;

    #[test]
    fn warning_like_categories_share_accent() {
        assert_eq!(
            category_color(NotificationCategory::Warning),
            category_color(NotificationCategory::Maintenance)
        );
        assert_ne!(
            category_color(NotificationCategory::Success),
            category_color(NotificationCategory::Danger)
        );
    }
}
