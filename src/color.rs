use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Diverging colour scale (red → yellow → green) over [-1, 1]
// ---------------------------------------------------------------------------

/// Anchor colours of the scale, evenly spaced from -1 to 1.
const ANCHORS: [(u8, u8, u8); 5] = [
    (165, 0, 38),
    (244, 109, 67),
    (255, 255, 191),
    (102, 189, 99),
    (0, 104, 55),
];

/// Fill used for undefined (NaN) coefficients.
pub const UNDEFINED_RGB: [u8; 3] = [160, 160, 160];

fn anchor(i: usize) -> LinSrgb {
    let (r, g, b) = ANCHORS[i];
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}

/// Map a coefficient to the diverging scale. Values outside [-1, 1] are
/// clamped to the end colours; NaN maps to [`UNDEFINED_RGB`].
pub fn diverging_rgb(value: f64) -> [u8; 3] {
    if value.is_nan() {
        return UNDEFINED_RGB;
    }
    let segments = (ANCHORS.len() - 1) as f32;
    let t = ((value.clamp(-1.0, 1.0) as f32 + 1.0) / 2.0) * segments;
    let lo = (t.floor() as usize).min(ANCHORS.len() - 2);
    let mixed = anchor(lo).mix(anchor(lo + 1), t - lo as f32);
    let rgb: Srgb<u8> = Srgb::<f32>::from_linear(mixed).into_format();
    [rgb.red, rgb.green, rgb.blue]
}

pub fn diverging_color32(value: f64) -> Color32 {
    let [r, g, b] = diverging_rgb(value);
    Color32::from_rgb(r, g, b)
}

/// Black or white, whichever reads better on top of `value`'s cell colour.
pub fn annotation_color(value: f64) -> Color32 {
    let [r, g, b] = diverging_rgb(value);
    let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_anchor_colours() {
        assert_eq!(diverging_rgb(-1.0), [165, 0, 38]);
        assert_eq!(diverging_rgb(1.0), [0, 104, 55]);
        assert_eq!(diverging_rgb(0.0), [255, 255, 191]);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(diverging_rgb(-3.0), diverging_rgb(-1.0));
        assert_eq!(diverging_rgb(7.0), diverging_rgb(1.0));
    }

    #[test]
    fn nan_is_grey() {
        assert_eq!(diverging_rgb(f64::NAN), UNDEFINED_RGB);
    }

    #[test]
    fn text_contrasts_with_cell() {
        assert_eq!(annotation_color(0.0), Color32::BLACK);
        assert_eq!(annotation_color(-1.0), Color32::WHITE);
    }
}
