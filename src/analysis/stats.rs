use crate::data::model::{Field, Subset};

// ---------------------------------------------------------------------------
// Scalar statistics
// ---------------------------------------------------------------------------

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample standard deviation (denominator `n - 1`). NaN for fewer than 2
/// values.
pub fn sample_std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    let ss: f64 = data.iter().map(|x| (x - m).powi(2)).sum();
    (ss / (data.len() - 1) as f64).sqrt()
}

/// Median with linear interpolation between the two middle values.
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn min(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

// ---------------------------------------------------------------------------
// Summary table
// ---------------------------------------------------------------------------

/// Descriptive statistics for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSummary {
    pub field: Field,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl FieldSummary {
    pub fn of(field: Field, values: &[f64]) -> Self {
        FieldSummary {
            field,
            mean: mean(values),
            std_dev: sample_std_dev(values),
            min: min(values),
            median: median(values),
            max: max(values),
        }
    }
}

/// One [`FieldSummary`] per field, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub fields: Vec<FieldSummary>,
}

impl Summary {
    pub fn from_subset(subset: &Subset) -> Self {
        let fields = Field::ALL
            .iter()
            .map(|&f| FieldSummary::of(f, &subset.column(f)))
            .collect();
        Summary { fields }
    }

    pub fn get(&self, field: Field) -> Option<&FieldSummary> {
        self.fields.iter().find(|s| s.field == field)
    }

    /// Mean of a field, NaN when the field is absent.
    pub fn mean_of(&self, field: Field) -> f64 {
        self.get(field).map_or(f64::NAN, |s| s.mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    #[test]
    fn mean_and_std_match_hand_values() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&v) - 5.0).abs() < 1e-12);
        // sum of squares 32, n - 1 = 7
        assert!((sample_std_dev(&v) - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn std_dev_of_two_points() {
        assert!((sample_std_dev(&[1.0, 3.0]) - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(sample_std_dev(&[1.0]).is_nan());
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn constant_column_has_zero_std() {
        assert_eq!(sample_std_dev(&[6.0, 6.0, 6.0]), 0.0);
    }

    #[test]
    fn summary_covers_every_field() {
        let subset = Subset::new(
            vec![
                Record::from_values([1.0, 10.0, 100.0, 50.0, 5.0]),
                Record::from_values([3.0, 30.0, 300.0, 70.0, 7.0]),
            ],
            0,
        );
        let summary = Summary::from_subset(&subset);
        assert_eq!(summary.fields.len(), 5);
        let inv = summary.get(Field::InventoryLevels).expect("present");
        assert_eq!(inv.mean, 20.0);
        assert_eq!(inv.min, 10.0);
        assert_eq!(inv.median, 20.0);
        assert_eq!(inv.max, 30.0);
        assert_eq!(summary.mean_of(Field::DeliveryPerformance), 60.0);
    }
}
