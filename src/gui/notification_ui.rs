use super::theme::{category_color, unread_fill};
use crate::notifications::view::{DropdownBody, NotificationView, MARK_ALL_LABEL, RETRY_LABEL};
use crate::notifications::NotificationIntent;
use eframe::egui;

const DROPDOWN_WIDTH: f32 = 340.0;

/// Bell trigger with the unread badge.
pub fn bell(ui: &mut egui::Ui, view: &NotificationView) -> egui::Response {
    let text = match &view.badge {
        Some(badge) => egui::RichText::new(format!("🔔 {badge}")).strong(),
        None => egui::RichText::new("🔔"),
    };
    ui.add(egui::Button::new(text).frame(false))
        .on_hover_text("Notifications")
}

/// Draw the dropdown under `anchor`. Returns the rectangle it occupies so
/// outside clicks can be detected.
pub fn dropdown(
    ctx: &egui::Context,
    anchor: egui::Pos2,
    body: &DropdownBody,
    intents: &mut Vec<NotificationIntent>,
) -> egui::Rect {
    let area = egui::Area::new(egui::Id::new("notifications_dropdown"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor - egui::vec2(DROPDOWN_WIDTH, 0.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(DROPDOWN_WIDTH);
                ui.label(egui::RichText::new("🔔 Notifications").strong());
                ui.separator();
                list_body(ui, body, intents);
                ui.separator();
                if ui.link(MARK_ALL_LABEL).clicked() {
                    intents.push(NotificationIntent::MarkAllAsRead);
                }
            });
        });
    area.response.rect
}

fn list_body(ui: &mut egui::Ui, body: &DropdownBody, intents: &mut Vec<NotificationIntent>) {
    let DropdownBody::Entries(entries) = body else {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            if let Some(message) = body.message() {
                ui.label(egui::RichText::new(message).weak());
            }
            if body.can_retry() && ui.button(RETRY_LABEL).clicked() {
                intents.push(NotificationIntent::Retry);
            }
            ui.add_space(12.0);
        });
        return;
    };

    egui::ScrollArea::vertical()
        .id_source("notifications_list")
        .max_height(360.0)
        .show(ui, |ui| {
            for entry in entries {
                let fill = if entry.unread {
                    unread_fill(ui.visuals())
                } else {
                    egui::Color32::TRANSPARENT
                };
                let resp = egui::Frame::none()
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(6.0, 4.0))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.colored_label(category_color(entry.category), "●");
                            ui.vertical(|ui| {
                                let title = egui::RichText::new(&entry.title);
                                ui.label(if entry.unread { title.strong() } else { title });
                                ui.label(&entry.message);
                                ui.label(egui::RichText::new(&entry.time_ago).small().weak());
                            });
                        });
                    })
                    .response
                    .interact(egui::Sense::click());
                if resp.clicked() {
                    intents.push(NotificationIntent::MarkAsRead(entry.id.clone()));
                }
            }
        });
}

/// Page-wide banner strip. Must be called before the central panel.
pub fn banner(ctx: &egui::Context, view: &NotificationView, intents: &mut Vec<NotificationIntent>) {
    let Some(banner) = &view.banner else {
        return;
    };
    let color = category_color(banner.category);
    egui::TopBottomPanel::top("notification_banner")
        .frame(
            egui::Frame::none()
                .fill(color)
                .inner_margin(egui::Margin::symmetric(12.0, 6.0)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("⚠ {}", banner.message))
                        .color(egui::Color32::WHITE)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = egui::RichText::new("✖").color(egui::Color32::WHITE);
                    if ui.add(egui::Button::new(close).frame(false)).clicked() {
                        intents.push(NotificationIntent::HideBanner);
                    }
                });
            });
        });
}

/// Toast stack anchored to the top-right corner.
pub fn toasts(ctx: &egui::Context, view: &NotificationView, intents: &mut Vec<NotificationIntent>) {
    if view.toasts.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toast_stack"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
        .show(ctx, |ui| {
            ui.set_width(300.0);
            for toast in &view.toasts {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(300.0);
                    ui.horizontal(|ui| {
                        let mut title = egui::RichText::new(&toast.title)
                            .color(category_color(toast.category))
                            .strong();
                        if toast.leaving {
                            title = title.weak();
                        }
                        ui.label(title);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.add(egui::Button::new("✖").frame(false)).clicked() {
                                intents.push(NotificationIntent::DismissToast(toast.id));
                            }
                        });
                    });
                    let body = egui::RichText::new(&toast.message);
                    ui.label(if toast.leaving { body.weak() } else { body });
                });
                ui.add_space(6.0);
            }
        });
}
