use asset_dashboard::api::ApiClient;
use asset_dashboard::gui::DashboardApp;
use asset_dashboard::logging;
use asset_dashboard::settings::{Settings, SETTINGS_FILE};

use eframe::egui;
use std::path::Path;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SETTINGS_FILE.to_string());
    let settings = Settings::load(&settings_path)?;
    logging::init(settings.debug_logging, settings.log_file.as_deref().map(Path::new));
    tracing::debug!(path = %settings_path, "settings loaded");

    let client = Arc::new(ApiClient::new(&settings.base_url, settings.request_timeout())?);
    let (w, h) = settings.window_size.unwrap_or((1100, 720));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w as f32, h as f32])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Asset Dashboard",
        native_options,
        Box::new(move |cc| {
            Box::new(
                DashboardApp::new(&cc.egui_ctx, client, &settings)
                    .with_settings_path(settings_path),
            )
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start dashboard window: {e}"))?;
    Ok(())
}
