// src/gui/components/terms_table.rs
//
// Read-only table of the terminology map in effect.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;
use crate::terms::TermMap;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Terms");

    let terms = TermMap::build(&app.options);
    if terms.is_empty() {
        ui.label("No substitutions for these options.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(110.0))
        .column(Column::remainder())
        .header(18.0, |mut header| {
            header.col(|ui| { ui.strong("Key"); });
            header.col(|ui| { ui.strong("Term"); });
        })
        .body(|mut body| {
            for (key, term) in terms.iter() {
                body.row(18.0, |mut row| {
                    row.col(|ui| { ui.monospace(key.as_str()); });
                    row.col(|ui| { ui.label(term); });
                });
            }
        });
}
