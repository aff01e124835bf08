mod analysis;
mod app;
mod color;
mod config;
mod data;
mod export;
mod report;
mod state;
mod ui;

use app::SupplyLensApp;
use config::AnalysisConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Supply Lens – Supply-Chain Explorer",
        options,
        Box::new(|_cc| {
            let app = SupplyLensApp::new(AnalysisConfig::default())?;
            log::info!("Started with a {}-row window", app.state.control.value);
            Ok(Box::new(app))
        }),
    )
}
