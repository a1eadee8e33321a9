use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::i18n::{self, Language, Labels, LANGUAGE_PICKER};
use crate::state::AppState;
use crate::ui::{plot, table};

const WARNING_COLOR: Color32 = Color32::from_rgb(230, 160, 30);
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 60, 60);

// ---------------------------------------------------------------------------
// Left side panel – language and filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    language_picker(ui, state);
    ui.separator();

    // A failed load shows nothing but the error.
    let Some(dataset) = state.dataset.clone() else {
        return;
    };
    let labels = i18n::labels(state.language);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Indicator multi-select ----
            ui.strong(labels.indicator_label);
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button(labels.select_all).clicked() {
                    state.select_all();
                }
                if ui.small_button(labels.select_none).clicked() {
                    state.select_none();
                }
            });

            for indicator in &dataset.indicators {
                let mut text = RichText::new(indicator.as_str());
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(indicator));
                }

                let mut checked = state.is_picked(indicator);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_indicator(indicator);
                }
            }
            ui.separator();

            // ---- Year range ----
            let Some(bounds) = dataset.year_bounds else {
                return;
            };
            ui.strong(labels.year_label);

            let mut from = state.picked_years.min;
            if ui
                .add(Slider::new(&mut from, bounds.min..=bounds.max).integer().text(labels.year_from))
                .changed()
            {
                state.set_year_min(from);
            }

            let mut to = state.picked_years.max;
            if ui
                .add(Slider::new(&mut to, bounds.min..=bounds.max).integer().text(labels.year_to))
                .changed()
            {
                state.set_year_max(to);
            }
        });
}

fn language_picker(ui: &mut Ui, state: &mut AppState) {
    ui.label(LANGUAGE_PICKER);
    egui::ComboBox::from_id_salt("language")
        .selected_text(state.language.native_name())
        .show_ui(ui, |ui: &mut Ui| {
            for lang in Language::ALL {
                ui.selectable_value(&mut state.language, lang, lang.native_name());
            }
        });
}

// ---------------------------------------------------------------------------
// Central panel – page chrome, chart and summary
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let labels = i18n::labels(state.language);

    if let Some(err) = &state.load_error {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(labels.load_error(err)).color(ERROR_COLOR).heading());
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new(labels.page_title).size(28.0).strong());
            ui.label(labels.subtitle);
            ui.label(RichText::new(labels.sidebar_hint).italics());
            ui.add_space(8.0);

            let empty_dataset = state.dataset.as_ref().is_some_and(|ds| ds.is_empty());

            match &state.dashboard {
                None => {}
                Some(Ok(_)) if empty_dataset => {
                    ui.label(labels.empty_dataset);
                }
                Some(Err(e)) => {
                    ui.label(RichText::new(labels.filter_error(e)).color(WARNING_COLOR));
                }
                Some(Ok(dashboard)) => {
                    if dashboard.row_count == 0 {
                        ui.label(labels.no_rows);
                    }
                    plot::growth_plot(ui, &dashboard.series, labels, 420.0);
                    ui.add_space(12.0);
                    table::summary_table(ui, &dashboard.summary, labels);
                }
            }

            footer(ui, labels);
        });
}

fn footer(ui: &mut Ui, labels: &Labels) {
    ui.add_space(16.0);
    ui.separator();
    ui.small(labels.footer);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    let labels = i18n::labels(state.language);

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button(labels.menu_file, |ui: &mut Ui| {
            if ui.button(labels.menu_open).clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button(labels.menu_reload).clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(state.data_path.display().to_string());

        if let (Some(ds), Some(Ok(d))) = (&state.dataset, &state.dashboard) {
            ui.separator();
            ui.label(format!("{} / {} {}", d.row_count, ds.len(), labels.rows_visible));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open growth data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}
