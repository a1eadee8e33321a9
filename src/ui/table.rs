use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::summary::SummaryRow;
use crate::i18n::Labels;

/// Statistics are shown with two decimals; the underlying values are not
/// rounded. Values that round to zero never show a minus sign.
pub fn format_stat(value: f64) -> String {
    let text = format!("{value:.2}");
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

/// Render the per-indicator summary table.
pub fn summary_table(ui: &mut Ui, rows: &[SummaryRow], labels: &Labels) {
    ui.heading(labels.summary_title);

    ui.push_id("summary_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(200.0))
            .columns(Column::auto().at_least(90.0), 3)
            .header(22.0, |mut header| {
                for title in [
                    labels.col_indicator,
                    labels.col_mean,
                    labels.col_max,
                    labels.col_min,
                ] {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for r in rows {
                    body.row(20.0, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.label(r.indicator.as_str());
                        });
                        for value in [r.mean, r.max, r.min] {
                            row.col(|ui: &mut Ui| {
                                ui.monospace(format_stat(value));
                            });
                        }
                    });
                }
            });
    });
}
