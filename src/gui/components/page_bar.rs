// src/gui/components/page_bar.rs
//
// Page path + Load / Revert / Apply / Export.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Page:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.page_path)
                .hint_text("saved dance page (.html)")
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            app.load_page();
        }
    });

    let loaded = app.session.is_some();
    ui.add_enabled_ui(loaded, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Revert").clicked() {
                logd!("UI: Revert clicked");
                app.revert();
            }
            if ui.button("Apply").clicked() {
                logd!("UI: Apply clicked");
                app.reapply();
            }

            ui.separator();

            ui.label("Output:");
            ui.add(egui::TextEdit::singleline(&mut app.out_path).font(egui::TextStyle::Monospace));
            if ui.button("Export").clicked() {
                app.export();
            }
        });
    });
}
