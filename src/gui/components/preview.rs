// src/gui/components/preview.rs
//
// Plain-text view of each revertible region as it currently reads, plus the
// last apply's per-rule counts. Purely a view.

use eframe::egui::{self, RichText};
use crate::core::{dom, sanitize::normalize_ws};
use crate::gui::app::App;
use crate::specs::Region;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(session) = app.session.as_ref() else {
        ui.label("Load a page to preview substitutions.");
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("preview_scroll")
        .show(ui, |ui| {
            for region in Region::ALL {
                ui.label(RichText::new(region.title()).strong());
                match region.locate(session.page()) {
                    Some(el) => {
                        let text = normalize_ws(&dom::text_content(&el));
                        ui.label(if text.is_empty() { s!("(empty)") } else { text });
                    }
                    None => { ui.weak("not on this page"); }
                }
                ui.add_space(6.0);
            }

            if let Some(report) = &app.last_report {
                ui.separator();
                ui.label(RichText::new("Last apply").strong());
                for o in &report.outcomes {
                    let n = o.changes.map(|n| n.to_string()).unwrap_or_else(|| s!("skipped"));
                    ui.label(format!("{}: {}", o.rule, n));
                }
            }
        });
}
