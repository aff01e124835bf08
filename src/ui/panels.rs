use anyhow::Result;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::export;
use crate::state::AppState;
use crate::ui::tables;

/// Rows shown in the dataset preview.
const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Left side panel – control, narrative, exports
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Window");
    ui.separator();

    // ---- Row-count slider ----
    let mut rows = state.control.value;
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Rows:");
        let slider = egui::Slider::new(&mut rows, state.control.min..=state.control.max)
            .step_by(state.control.step as f64)
            .integer();
        if ui.add(slider).changed() {
            state.set_rows(rows);
        }
    });
    ui.add_space(8.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            narrative(ui, state);
            ui.separator();

            ui.strong("Copy to clipboard");
            ui.horizontal_wrapped(|ui: &mut Ui| {
                if ui.button("Summary CSV").clicked() {
                    let text = export::summary_csv(&state.output.summary);
                    copy_to_clipboard(ui, state, "summary", text);
                }
                if ui.button("Correlation CSV").clicked() {
                    let text = export::correlation_csv(&state.output.correlation);
                    copy_to_clipboard(ui, state, "correlation matrix", text);
                }
                if ui.button("Subset CSV").clicked() {
                    let text = export::subset_csv(&state.output.subset);
                    copy_to_clipboard(ui, state, "subset", text);
                }
                if ui.button("Report").clicked() {
                    let text = Ok(state.output.narrative.to_markdown());
                    copy_to_clipboard(ui, state, "report", text);
                }
            });
            ui.separator();

            egui::CollapsingHeader::new(RichText::new("Dataset preview").strong())
                .id_salt("dataset_preview")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    tables::records_table(
                        ui,
                        "preview_table",
                        0,
                        state.dataset.head(PREVIEW_ROWS),
                    );
                });
        });
}

/// Heading, observations and top correlations of the current window.
fn narrative(ui: &mut Ui, state: &AppState) {
    let narrative = &state.output.narrative;
    ui.label(RichText::new(&narrative.heading).strong().size(15.0));
    ui.add_space(4.0);

    ui.strong("Observations");
    for obs in &narrative.observations {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(format!("{}:", obs.label));
            ui.label(RichText::new(&obs.value).strong());
            ui.label(obs.unit);
        });
    }
    ui.add_space(4.0);

    ui.strong("Top correlations (absolute value)");
    if narrative.top_correlations.is_empty() {
        ui.label("No field pairs available.");
    }
    for line in &narrative.top_correlations {
        ui.label(format!("• {line}"));
    }
}

fn copy_to_clipboard(ui: &Ui, state: &mut AppState, what: &str, text: Result<String>) {
    match text {
        Ok(text) => {
            log::info!("Copied {what} ({} bytes) to clipboard", text.len());
            ui.ctx().copy_text(text);
            state.set_status(format!("Copied {what} to clipboard"));
        }
        Err(e) => {
            log::error!("Failed to export {what}: {e:#}");
            state.set_error(format!("Error: {e:#}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Supply Lens");
        ui.separator();

        ui.label(format!(
            "{} rows generated (seed {}), analysing last {}",
            state.dataset.len(),
            state.config.seed,
            state.output.rows_used
        ));

        let degenerate = state.output.correlation.degenerate_fields();
        if !degenerate.is_empty() {
            ui.separator();
            let names: Vec<&str> = degenerate.iter().map(|f| f.name()).collect();
            ui.label(
                RichText::new(format!("Constant in window: {}", names.join(", ")))
                    .color(Color32::YELLOW),
            );
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.is_error { Color32::RED } else { Color32::GRAY };
            ui.label(RichText::new(&msg.text).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – matrix, heatmap, summary
// ---------------------------------------------------------------------------

/// Render the analysis artifacts in display order.
pub fn central_panel(ui: &mut Ui, state: &AppState, texture: &egui::TextureHandle) {
    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Correlation matrix");
            tables::correlation_table(ui, &state.output.correlation);
            ui.add_space(12.0);

            crate::ui::plot::heatmap_plot(ui, &state.output.heatmap, texture);
            ui.add_space(12.0);

            ui.strong("Summary statistics (selected subset)");
            tables::summary_table(ui, &state.output.summary);
        });
}
