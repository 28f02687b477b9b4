use crate::dashboard::view::{StatsView, NO_ACTIVITY_MESSAGE};
use eframe::egui;

pub fn show(ui: &mut egui::Ui, view: &StatsView) {
    ui.columns(view.counters.len().max(1), |cols| {
        for (col, counter) in cols.iter_mut().zip(&view.counters) {
            egui::Frame::group(col.style()).show(col, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new(counter.label).weak());
                ui.label(egui::RichText::new(&counter.value).size(28.0).strong());
            });
        }
    });

    ui.add_space(12.0);
    ui.heading("Recent activity");
    ui.separator();

    if view.activities.is_empty() {
        ui.label(egui::RichText::new(NO_ACTIVITY_MESSAGE).weak());
        return;
    }

    egui::ScrollArea::vertical()
        .id_source("recent_activities")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for activity in &view.activities {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&activity.title).strong());
                        if !activity.description.is_empty() {
                            ui.label(egui::RichText::new(&activity.description).weak());
                        }
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&activity.time_ago).small().weak());
                    });
                });
                ui.separator();
            }
        });
}
