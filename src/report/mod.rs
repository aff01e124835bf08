//! The render pipeline: subset → statistics → ranking → presentation
//! artifacts. [`render`] is pure and knows nothing about egui, so every
//! artifact the UI shows can be checked in isolation.

pub mod heatmap;

use crate::analysis::correlation::CorrelationMatrix;
use crate::analysis::ranking::{top_pairs, RankedPair};
use crate::analysis::stats::Summary;
use crate::config::AnalysisConfig;
use crate::data::model::{Dataset, Field, Subset};
use crate::data::subset::get_recent;

use self::heatmap::Heatmap;

/// Decimals shown for summary statistics.
pub const SUMMARY_DECIMALS: usize = 2;
/// Decimals shown for correlation coefficients in text and tables.
pub const CORRELATION_DECIMALS: usize = 3;
/// Decimals used for heatmap cell annotations.
pub const HEATMAP_DECIMALS: usize = 2;

/// Fixed-point formatting that spells undefined values as `NaN`.
pub fn fmt_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.decimals$}")
    }
}

// ---------------------------------------------------------------------------
// Narrative
// ---------------------------------------------------------------------------

/// One highlighted mean in the narrative.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// Short text summary of the current window.
#[derive(Debug, Clone, PartialEq)]
pub struct Narrative {
    pub heading: String,
    pub observations: Vec<Observation>,
    /// Lines of the form `A vs B: correlation = r`.
    pub top_correlations: Vec<String>,
}

impl Narrative {
    fn build(rows_used: usize, summary: &Summary, top: &[RankedPair]) -> Self {
        let observation = |label: &'static str, field: Field, unit: &'static str| Observation {
            label,
            value: fmt_fixed(summary.mean_of(field), SUMMARY_DECIMALS),
            unit,
        };
        Narrative {
            heading: format!("Interactive analysis (using last {rows_used} rows)"),
            observations: vec![
                observation("Mean Supplier Lead Time", Field::SupplierLeadTime, "days"),
                observation("Mean Inventory Level", Field::InventoryLevels, "units"),
                observation("Delivery Performance (mean)", Field::DeliveryPerformance, "%"),
            ],
            top_correlations: top
                .iter()
                .map(|p| {
                    format!(
                        "{} vs {}: correlation = {}",
                        p.first,
                        p.second,
                        fmt_fixed(p.correlation, CORRELATION_DECIMALS)
                    )
                })
                .collect(),
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut md = format!("### {}\n\n**Observations:**\n", self.heading);
        for obs in &self.observations {
            md.push_str(&format!("- {}: **{}** {}\n", obs.label, obs.value, obs.unit));
        }
        md.push_str("\n**Top correlations (absolute value):**\n");
        for line in &self.top_correlations {
            md.push_str(&format!("- {line}\n"));
        }
        md
    }
}

// ---------------------------------------------------------------------------
// RenderedOutput
// ---------------------------------------------------------------------------

/// Everything displayed for one control value, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedOutput {
    pub requested: usize,
    pub rows_used: usize,
    pub narrative: Narrative,
    pub top_pairs: Vec<RankedPair>,
    pub correlation: CorrelationMatrix,
    pub heatmap: Heatmap,
    pub summary: Summary,
    pub subset: Subset,
}

/// Run the whole pipeline for a requested window size.
pub fn render(dataset: &Dataset, requested: usize, config: &AnalysisConfig) -> RenderedOutput {
    let subset = get_recent(dataset, requested, config.clamp_floor);
    let rows_used = subset.len();
    log::debug!("Rendering window: requested {requested}, using {rows_used}");

    let summary = Summary::from_subset(&subset);
    let correlation = CorrelationMatrix::from_subset(&subset, &Field::ALL);
    let top = top_pairs(&correlation, config.top_k);
    let narrative = Narrative::build(rows_used, &summary, &top);
    let heatmap = Heatmap::render(&correlation, rows_used);

    RenderedOutput {
        requested,
        rows_used,
        narrative,
        top_pairs: top,
        correlation,
        heatmap,
        summary,
        subset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::generate;

    fn dataset() -> (Dataset, AnalysisConfig) {
        let cfg = AnalysisConfig::default();
        (generate(&cfg).expect("generates"), cfg)
    }

    #[test]
    fn fmt_fixed_rounds_and_spells_nan() {
        assert_eq!(fmt_fixed(0.12345, 3), "0.123");
        assert_eq!(fmt_fixed(-0.5, 2), "-0.50");
        assert_eq!(fmt_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn full_window_scenario() {
        let (ds, cfg) = dataset();
        let out = render(&ds, 74, &cfg);
        assert_eq!(out.rows_used, 74);
        let delivery = out.summary.mean_of(Field::DeliveryPerformance);
        assert!((40.0..=100.0).contains(&delivery));
        assert_eq!(out.correlation.size(), 5);
        assert_eq!(out.top_pairs.len(), 3);
        assert_eq!(out.narrative.top_correlations.len(), 3);
        assert!(out.narrative.heading.contains("last 74 rows"));
    }

    #[test]
    fn five_row_window_has_finite_std() {
        let (ds, cfg) = dataset();
        let out = render(&ds, 5, &cfg);
        assert_eq!(out.subset.records(), &ds.records()[69..]);
        for s in &out.summary.fields {
            let col = out.subset.column(s.field);
            let constant = col.iter().all(|&v| v == col[0]);
            assert!(!s.std_dev.is_nan());
            assert_eq!(s.std_dev == 0.0, constant);
        }
    }

    #[test]
    fn narrative_uses_summary_means() {
        let (ds, cfg) = dataset();
        let out = render(&ds, 20, &cfg);
        let expected = fmt_fixed(out.summary.mean_of(Field::InventoryLevels), 2);
        assert_eq!(out.narrative.observations[1].value, expected);
        assert_eq!(out.narrative.observations[1].unit, "units");

        let md = out.narrative.to_markdown();
        assert!(md.starts_with("### Interactive analysis (using last 20 rows)"));
        assert!(md.contains("Top correlations (absolute value)"));
    }

    #[test]
    fn render_leaves_dataset_untouched() {
        let (ds, cfg) = dataset();
        let before = ds.clone();
        let _ = render(&ds, 33, &cfg);
        assert_eq!(ds, before);
    }

    #[test]
    fn out_of_range_request_is_clamped() {
        let (ds, cfg) = dataset();
        let out = render(&ds, 1, &cfg);
        assert_eq!(out.requested, 1);
        assert_eq!(out.rows_used, 2);
        let out = render(&ds, 1000, &cfg);
        assert_eq!(out.rows_used, 74);
    }
}
