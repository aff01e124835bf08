use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::correlation::CorrelationMatrix;
use crate::analysis::stats::Summary;
use crate::data::model::{Field, Record};
use crate::report::{fmt_fixed, CORRELATION_DECIMALS, SUMMARY_DECIMALS};

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Correlation matrix table
// ---------------------------------------------------------------------------

pub fn correlation_table(ui: &mut Ui, matrix: &CorrelationMatrix) {
    let n = matrix.size();
    TableBuilder::new(ui)
        .id_salt("correlation_table")
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(150.0))
        .columns(Column::auto().at_least(90.0), n)
        .header(ROW_HEIGHT, |mut header| {
            header.col(|_ui| {});
            for field in matrix.fields() {
                header.col(|ui| {
                    ui.strong(field.name());
                });
            }
        })
        .body(|mut body| {
            for (i, field) in matrix.fields().iter().enumerate() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.strong(field.name());
                    });
                    for j in 0..n {
                        let value = matrix.at(i, j);
                        row.col(|ui| {
                            let text = fmt_fixed(value, CORRELATION_DECIMALS);
                            if value.is_nan() {
                                ui.label(RichText::new(text).italics().weak());
                            } else {
                                ui.monospace(text);
                            }
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Summary statistics table
// ---------------------------------------------------------------------------

pub fn summary_table(ui: &mut Ui, summary: &Summary) {
    const HEADERS: [&str; 5] = ["mean", "std", "min", "50%", "max"];
    TableBuilder::new(ui)
        .id_salt("summary_table")
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(150.0))
        .columns(Column::auto().at_least(70.0), HEADERS.len())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|_ui| {});
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for s in &summary.fields {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.strong(s.field.name());
                    });
                    for value in [s.mean, s.std_dev, s.min, s.median, s.max] {
                        row.col(|ui| {
                            ui.monospace(fmt_fixed(value, SUMMARY_DECIMALS));
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Raw rows (dataset preview)
// ---------------------------------------------------------------------------

pub fn records_table(ui: &mut Ui, id: &str, first_index: usize, records: &[Record]) {
    TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .vscroll(false)
        .column(Column::auto())
        .columns(Column::auto(), Field::ALL.len())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for field in Field::ALL {
                header.col(|ui| {
                    ui.strong(field.short_name());
                });
            }
        })
        .body(|mut body| {
            for (offset, rec) in records.iter().enumerate() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label((first_index + offset).to_string());
                    });
                    for field in Field::ALL {
                        row.col(|ui| {
                            ui.monospace(fmt_fixed(rec.get(field), SUMMARY_DECIMALS));
                        });
                    }
                });
            }
        });
}
