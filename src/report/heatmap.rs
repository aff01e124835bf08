use image::{Rgba, RgbaImage};

use crate::analysis::correlation::CorrelationMatrix;
use crate::color::diverging_rgb;

/// Side length of one matrix cell in the raster, in pixels.
pub const CELL_PX: u32 = 48;

/// Raster rendering of a correlation matrix on the fixed [-1, 1] scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub title: String,
    /// Row `i` of the matrix is the `i`-th band from the top of the image.
    pub image: RgbaImage,
    /// Coefficients in matrix order, kept for cell annotations.
    pub values: Vec<Vec<f64>>,
    pub labels: Vec<&'static str>,
}

impl Heatmap {
    pub fn render(matrix: &CorrelationMatrix, rows_used: usize) -> Self {
        let n = matrix.size();
        let side = n as u32 * CELL_PX;
        let image = RgbaImage::from_fn(side, side, |x, y| {
            let (row, col) = ((y / CELL_PX) as usize, (x / CELL_PX) as usize);
            let [r, g, b] = diverging_rgb(matrix.at(row, col));
            Rgba([r, g, b, 255])
        });
        let values = (0..n)
            .map(|i| (0..n).map(|j| matrix.at(i, j)).collect())
            .collect();

        Heatmap {
            title: format!("Correlation Heatmap — last {rows_used} rows"),
            image,
            values,
            labels: matrix.fields().iter().map(|f| f.short_name()).collect(),
        }
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::data::generator::generate;
    use crate::data::model::{Field, Record, Subset};
    use crate::data::subset::get_recent;

    #[test]
    fn raster_has_one_block_per_cell() {
        let ds = generate(&AnalysisConfig::default()).expect("generates");
        let m = CorrelationMatrix::from_subset(&get_recent(&ds, 20, 2), &Field::ALL);
        let hm = Heatmap::render(&m, 20);
        assert_eq!(hm.image.dimensions(), (5 * CELL_PX, 5 * CELL_PX));
        assert_eq!(hm.size(), 5);
        assert_eq!(hm.title, "Correlation Heatmap — last 20 rows");

        // diagonal cells carry the +1 colour
        let [r, g, b] = diverging_rgb(1.0);
        for i in 0..5 {
            let px = hm.image.get_pixel(i * CELL_PX + CELL_PX / 2, i * CELL_PX + 1);
            assert_eq!(px.0, [r, g, b, 255]);
        }
    }

    #[test]
    fn nan_cells_are_grey() {
        let rows = vec![
            Record::from_values([1.0, 5.0, 0.0, 0.0, 0.0]),
            Record::from_values([2.0, 5.0, 0.0, 0.0, 0.0]),
        ];
        let m = CorrelationMatrix::from_subset(
            &Subset::new(rows, 0),
            &[Field::SupplierLeadTime, Field::InventoryLevels],
        );
        let hm = Heatmap::render(&m, 2);
        let [r, g, b] = crate::color::UNDEFINED_RGB;
        assert_eq!(hm.image.get_pixel(CELL_PX + 3, 3).0, [r, g, b, 255]);
        assert!(hm.values[0][1].is_nan());
    }
}
