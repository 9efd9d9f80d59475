// src/gui/components/options_form.rs
//
// The options form. Every edit is saved straight to the store, like the
// extension's options page; the store's change notification drives the
// preview's revert+apply.

use eframe::egui;
use crate::config::options::RoleTerms;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Options");

    let mut changed = false;

    changed |= ui
        .checkbox(&mut app.options.enabled, "Replace terms on dance pages")
        .changed();

    changed |= ui
        .checkbox(&mut app.options.use_rsr, "Shoulder rounds & quick trades")
        .on_hover_text("gypsy → right/left shoulder round, double gyp → quick trades")
        .changed();

    ui.add_space(4.0);
    ui.label("Role terms:");
    let before = app.options.role_terms.clone();
    egui::ComboBox::from_id_salt("role_terms")
        .selected_text(app.options.role_terms.label())
        .show_ui(ui, |ui| {
            for choice in RoleTerms::choices() {
                let label = choice.label().to_owned();
                ui.selectable_value(&mut app.options.role_terms, choice, label);
            }
        });
    changed |= app.options.role_terms != before;

    if changed {
        logf!("UI: options → {:?}", app.options);
        app.save_options();
    }
}
