use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::correlation::CorrelationMatrix;
use crate::analysis::stats::Summary;
use crate::data::model::Subset;
use crate::report::{fmt_fixed, CORRELATION_DECIMALS, SUMMARY_DECIMALS};

// ---------------------------------------------------------------------------
// CSV text for the clipboard buttons
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SummaryRow<'a> {
    field: &'a str,
    mean: String,
    std: String,
    min: String,
    #[serde(rename = "50%")]
    median: String,
    max: String,
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().context("flushing CSV buffer")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

/// The summary table, values rounded as displayed.
pub fn summary_csv(summary: &Summary) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for s in &summary.fields {
        wtr.serialize(SummaryRow {
            field: s.field.name(),
            mean: fmt_fixed(s.mean, SUMMARY_DECIMALS),
            std: fmt_fixed(s.std_dev, SUMMARY_DECIMALS),
            min: fmt_fixed(s.min, SUMMARY_DECIMALS),
            median: fmt_fixed(s.median, SUMMARY_DECIMALS),
            max: fmt_fixed(s.max, SUMMARY_DECIMALS),
        })
        .with_context(|| format!("writing summary row for {}", s.field))?;
    }
    finish(wtr)
}

/// The correlation matrix with a leading header row and label column.
pub fn correlation_csv(matrix: &CorrelationMatrix) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    let mut header = vec![String::new()];
    header.extend(matrix.fields().iter().map(|f| f.name().to_string()));
    wtr.write_record(&header).context("writing correlation header")?;

    for (i, field) in matrix.fields().iter().enumerate() {
        let mut record = vec![field.name().to_string()];
        record.extend((0..matrix.size()).map(|j| fmt_fixed(matrix.at(i, j), CORRELATION_DECIMALS)));
        wtr.write_record(&record)
            .with_context(|| format!("writing correlation row for {field}"))?;
    }
    finish(wtr)
}

/// The raw rows of the current window at full precision.
pub fn subset_csv(subset: &Subset) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for rec in subset.records() {
        wtr.serialize(rec).context("writing subset row")?;
    }
    finish(wtr)
}
