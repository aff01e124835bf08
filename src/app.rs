use anyhow::{Context, Result};
use eframe::egui;

use crate::config::AnalysisConfig;
use crate::data::generator::generate;
use crate::state::AppState;
use crate::ui::panels;
use crate::ui::plot::{heatmap_texture, HeatmapTexture};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SupplyLensApp {
    pub state: AppState,
    heatmap: Option<HeatmapTexture>,
}

impl SupplyLensApp {
    /// Generate the dataset once and render the default window.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let dataset = generate(&config).context("generating synthetic dataset")?;
        Ok(Self {
            state: AppState::new(dataset, config),
            heatmap: None,
        })
    }
}

impl eframe::App for SupplyLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: slider and narrative ----
        egui::SidePanel::left("control_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tables and heatmap ----
        let texture = heatmap_texture(ctx, &mut self.heatmap, &self.state);
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &self.state, texture);
        });
    }
}
