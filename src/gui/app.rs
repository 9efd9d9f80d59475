// src/gui/app.rs
use std::{error::Error, fs, path::Path};

use eframe::egui;

use crate::{
    config::options::Options,
    core::Page,
    rules::ApplyReport,
    session::Session,
    store::{ChangeFlag, FileStore, OptionsStore},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Caller's Box Configurator",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(FileStore::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub store: FileStore,
    // Subscribed to `store` once; every loaded session shares it
    pub pending: ChangeFlag,

    // Form state; saved to the store on every edit
    pub options: Options,

    // Page under preview
    pub page_path: String,
    pub out_path: String,
    pub session: Option<Session>,
    pub last_report: Option<ApplyReport>,

    pub status: String,
}

impl App {
    pub fn new(store: FileStore) -> Self {
        let (options, status) = match store.options() {
            Ok(o) => (o, s!("Idle")),
            Err(e) => {
                loge!("Init: {}", e);
                (Options::default(), format!("Could not read options: {e}"))
            }
        };
        logf!("Init: options {:?} from {}", options, store.path().display());
        let pending = ChangeFlag::default();
        pending.watch(&store);

        Self {
            store,
            pending,
            options,
            page_path: s!(),
            out_path: s!(),
            session: None,
            last_report: None,
            status,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Persist the form. The store notifies the session, which then runs one
    /// revert+apply cycle.
    pub fn save_options(&mut self) {
        if let Err(e) = self.store.set(&self.options) {
            loge!("Save options: {}", e);
            self.status(format!("Could not save options: {e}"));
            return;
        }
        self.pump();
    }

    /// Drain pending change notifications into the session.
    pub fn pump(&mut self) {
        let Some(session) = self.session.as_mut() else { return };
        match session.process_pending(&self.store) {
            Ok(Some(report)) => {
                self.status = format!("Updated: {} change(s)", report.total());
                self.last_report = Some(report);
            }
            Ok(None) => {}
            Err(e) => {
                loge!("Update: {}", e);
                self.status = format!("Update failed: {e}");
            }
        }
    }

    pub fn load_page(&mut self) {
        let path = self.page_path.trim().to_string();
        if path.is_empty() {
            self.status("No page path");
            return;
        }
        let html = match fs::read_to_string(&path) {
            Ok(h) => h,
            Err(e) => {
                self.status(format!("Could not read {path}: {e}"));
                return;
            }
        };
        // A fresh read below covers anything saved before this load
        self.pending.take();
        let session = self
            .store
            .options()
            .and_then(|opts| Session::new(Page::parse(&html), opts, self.pending.clone()));
        match session {
            Ok(mut session) => {
                let report = session.apply();
                logf!("Load: {} ({} regions)", path, session.snapshots().len());
                self.status = format!(
                    "Loaded {}: {} region(s), {} change(s)",
                    Path::new(&path).file_name().map(|f| f.to_string_lossy()).unwrap_or_default(),
                    session.snapshots().len(),
                    report.total()
                );
                self.last_report = Some(report);
                if self.out_path.is_empty() {
                    self.out_path = default_out_path(&path);
                }
                self.session = Some(session);
            }
            Err(e) => {
                loge!("Load: {}", e);
                self.status(format!("Load failed: {e}"));
            }
        }
    }

    pub fn revert(&mut self) {
        let Some(session) = self.session.as_mut() else { return };
        match session.revert() {
            Ok(()) => {
                self.last_report = None;
                self.status("Reverted to original");
            }
            Err(e) => self.status(format!("Revert failed: {e}")),
        }
    }

    pub fn reapply(&mut self) {
        let Some(session) = self.session.as_mut() else { return };
        match session.reapply(&self.store) {
            Ok(report) => {
                self.status = format!("Applied: {} change(s)", report.total());
                self.last_report = Some(report);
            }
            Err(e) => self.status(format!("Apply failed: {e}")),
        }
    }

    pub fn export(&mut self) {
        let Some(session) = self.session.as_ref() else { return };
        let out = self.out_path.trim().to_string();
        let result = session
            .page()
            .to_html()
            .and_then(|html| fs::write(&out, html).map_err(Into::into));
        match result {
            Ok(()) => {
                logf!("Export: wrote {}", out);
                self.status(format!("Wrote {out}"));
            }
            Err(e) => self.status(format!("Export failed: {e}")),
        }
    }
}

fn default_out_path(input: &str) -> String {
    let p = Path::new(input);
    let stem = p.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| s!("page"));
    p.with_file_name(join!(&stem, ".terms.html")).to_string_lossy().into_owned()
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("options")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::options_form::draw(ui, self);
                ui.separator();
                crate::gui::components::terms_table::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::page_bar::draw(ui, self);
            ui.separator();
            crate::gui::components::preview::draw(ui, self);
        });
    }
}
