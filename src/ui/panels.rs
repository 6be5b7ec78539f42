use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader::Source;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar. Returns a source to (re)load, if requested.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) -> Option<Source> {
    let mut request = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                request = open_file_dialog();
                ui.close_menu();
            }
            if ui
                .add_enabled(state.chart.is_some(), egui::Button::new("Export HTML…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        if ui
            .add_enabled(!state.loading, egui::Button::new("Reload"))
            .clicked()
        {
            request = Some(state.source.clone());
        }

        ui.separator();

        if state.loading {
            ui.spinner();
            ui.label(format!("Fetching {}", state.source));
        } else if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} observations, base temperature {}℃",
                ds.len(),
                ds.base_temperature
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    request
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog() -> Option<Source> {
    rfd::FileDialog::new()
        .set_title("Open temperature dataset")
        .add_filter("JSON", &["json"])
        .pick_file()
        .map(Source::File)
}

pub fn export_file_dialog(state: &mut AppState) {
    let Some(chart) = &state.chart else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export chart")
        .set_file_name("heat-map.html")
        .add_filter("HTML", &["html"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = crate::chart::svg::write_document(&path, chart) {
            log::error!("Export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
