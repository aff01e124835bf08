use eframe::egui::{self, ColorImage, Context, RichText, Sense, TextureHandle, TextureOptions, Ui, Vec2};
use egui_plot::{uniform_grid_spacer, Plot, PlotImage, PlotPoint, Text};

use crate::color::{annotation_color, diverging_color32};
use crate::report::heatmap::Heatmap;
use crate::report::{fmt_fixed, HEATMAP_DECIMALS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Heatmap texture cache
// ---------------------------------------------------------------------------

/// GPU copy of the current heatmap raster, tagged with the render revision
/// it was uploaded for.
pub struct HeatmapTexture {
    revision: u64,
    handle: TextureHandle,
}

impl HeatmapTexture {
    fn upload(ctx: &Context, heatmap: &Heatmap, revision: u64) -> Self {
        let (w, h) = heatmap.image.dimensions();
        let image = ColorImage::from_rgba_unmultiplied([w as usize, h as usize], heatmap.image.as_raw());
        HeatmapTexture {
            revision,
            handle: ctx.load_texture("correlation_heatmap", image, TextureOptions::NEAREST),
        }
    }
}

/// Return the texture for the current output, re-uploading after a render.
pub fn heatmap_texture<'a>(
    ctx: &Context,
    cache: &'a mut Option<HeatmapTexture>,
    state: &AppState,
) -> &'a TextureHandle {
    let stale = cache
        .as_ref()
        .map_or(true, |tex| tex.revision != state.revision);
    if stale {
        *cache = None;
    }
    let tex = cache.get_or_insert_with(|| {
        log::debug!("Uploading heatmap texture for revision {}", state.revision);
        HeatmapTexture::upload(ctx, &state.output.heatmap, state.revision)
    });
    &tex.handle
}

// ---------------------------------------------------------------------------
// Heatmap plot (central panel)
// ---------------------------------------------------------------------------

/// Render the annotated correlation heatmap with field-name axes.
pub fn heatmap_plot(ui: &mut Ui, heatmap: &Heatmap, texture: &TextureHandle) {
    ui.label(RichText::new(&heatmap.title).strong());

    let n = heatmap.size();
    let side = n as f64;
    let x_labels = heatmap.labels.clone();
    let y_labels = heatmap.labels.clone();

    Plot::new("correlation_heatmap")
        .height(360.0)
        .width(420.0)
        .data_aspect(1.0)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark, _range| axis_label(&x_labels, mark.value, false))
        .y_axis_formatter(move |mark, _range| axis_label(&y_labels, mark.value, true))
        .show(ui, |plot_ui| {
            let center = (side - 1.0) / 2.0;
            plot_ui.image(PlotImage::new(
                texture.id(),
                PlotPoint::new(center, center),
                Vec2::splat(n as f32),
            ));

            for (i, row) in heatmap.values.iter().enumerate() {
                for (j, &value) in row.iter().enumerate() {
                    // matrix row 0 is drawn at the top
                    let position = PlotPoint::new(j as f64, side - 1.0 - i as f64);
                    let text = RichText::new(fmt_fixed(value, HEATMAP_DECIMALS))
                        .color(annotation_color(value));
                    plot_ui.text(Text::new(position, text));
                }
            }
        });

    color_bar(ui);
}

/// Label for an integer grid mark, empty between cells and outside the matrix.
fn axis_label(labels: &[&str], value: f64, flipped: bool) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    let idx = rounded as usize;
    if idx >= labels.len() {
        return String::new();
    }
    let idx = if flipped { labels.len() - 1 - idx } else { idx };
    labels[idx].to_string()
}

/// Horizontal legend for the fixed [-1, 1] scale.
fn color_bar(ui: &mut Ui) {
    const STEPS: usize = 64;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(300.0, 12.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let step_width = rect.width() / STEPS as f32;
    for k in 0..STEPS {
        let value = -1.0 + 2.0 * (k as f64 + 0.5) / STEPS as f64;
        let left = rect.left() + k as f32 * step_width;
        let cell = egui::Rect::from_min_max(
            egui::pos2(left, rect.top()),
            egui::pos2(left + step_width + 0.5, rect.bottom()),
        );
        painter.rect_filled(cell, 0.0, diverging_color32(value));
    }
    ui.horizontal(|ui: &mut Ui| {
        ui.set_width(300.0);
        ui.small("-1");
        ui.add_space(130.0);
        ui.small("0");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.small("+1");
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [&str; 3] = ["a", "b", "c"];

    #[test]
    fn x_labels_follow_column_order() {
        assert_eq!(axis_label(&LABELS, 0.0, false), "a");
        assert_eq!(axis_label(&LABELS, 2.0, false), "c");
    }

    #[test]
    fn y_labels_are_flipped() {
        assert_eq!(axis_label(&LABELS, 0.0, true), "c");
        assert_eq!(axis_label(&LABELS, 2.0, true), "a");
    }

    #[test]
    fn off_grid_marks_are_blank() {
        assert_eq!(axis_label(&LABELS, 0.5, false), "");
        assert_eq!(axis_label(&LABELS, -1.0, false), "");
        assert_eq!(axis_label(&LABELS, 3.0, false), "");
    }
}
